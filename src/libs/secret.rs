//! Symmetric cipher for the task stores.
//!
//! One key file is shared by every owner's store in an installation. The key
//! is loaded once per process by [`init`] and cached for the lifetime of the
//! process; [`encrypt`] and [`decrypt`] fail with [`TaskError::KeyMissing`]
//! until that happens.
//!
//! Tokens use the Fernet layout, base64url-encoded:
//!
//! ```text
//! 0x80 | timestamp (u64 BE) | IV (16) | AES-128-CBC ciphertext | HMAC-SHA256 (32)
//! ```
//!
//! The 32-byte key is split into a signing half (first 16 bytes) and an
//! encryption half (last 16 bytes). The key file holds the base64url form of
//! the key.

use super::data_storage::DataStorage;
use crate::libs::error::TaskError;
use aes::Aes128;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

pub const KEY_FILE_NAME: &str = "key.key";

type Aes128Cbc = Cbc<Aes128, Pkcs7>;
type HmacSha256 = Hmac<Sha256>;

const TOKEN_VERSION: u8 = 0x80;
const KEY_LEN: usize = 32;
const HALF_KEY_LEN: usize = KEY_LEN / 2;
const IV_LEN: usize = 16;
const TAG_LEN: usize = 32;
const BLOCK_LEN: usize = 16;
const HEADER_LEN: usize = 1 + 8 + IV_LEN;

static CIPHER: OnceLock<Cipher> = OnceLock::new();

#[derive(Clone, PartialEq, Eq)]
pub struct Cipher {
    signing_key: [u8; HALF_KEY_LEN],
    encryption_key: [u8; HALF_KEY_LEN],
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher").finish_non_exhaustive()
    }
}

impl Cipher {
    /// Creates a cipher with a fresh random key.
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);
        Self::from_key(&key)
    }

    fn from_key(key: &[u8; KEY_LEN]) -> Self {
        let mut signing_key = [0u8; HALF_KEY_LEN];
        let mut encryption_key = [0u8; HALF_KEY_LEN];
        signing_key.copy_from_slice(&key[..HALF_KEY_LEN]);
        encryption_key.copy_from_slice(&key[HALF_KEY_LEN..]);
        Self { signing_key, encryption_key }
    }

    /// Parses a base64url-encoded 32-byte key.
    pub fn from_encoded(encoded: &str) -> Result<Self, TaskError> {
        let bytes = BASE64_URL_SAFE
            .decode(encoded.trim())
            .map_err(|_| TaskError::Decryption("key is not valid base64".to_string()))?;
        let key: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| TaskError::Decryption(format!("key must be {} bytes", KEY_LEN)))?;
        Ok(Self::from_key(&key))
    }

    pub fn encoded_key(&self) -> String {
        let mut key = Vec::with_capacity(KEY_LEN);
        key.extend_from_slice(&self.signing_key);
        key.extend_from_slice(&self.encryption_key);
        BASE64_URL_SAFE.encode(key)
    }

    pub fn from_key_file(path: &Path) -> Result<Self, TaskError> {
        match fs::read_to_string(path) {
            Ok(encoded) => Self::from_encoded(&encoded),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(TaskError::KeyMissing),
            Err(e) => Err(TaskError::Io(e)),
        }
    }

    /// Loads the key at `path`, generating and persisting a new one if the
    /// file does not exist yet. Calling it again returns the same key.
    pub fn ensure_key(path: &Path) -> Result<Self, TaskError> {
        if path.exists() {
            return Self::from_key_file(path);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let cipher = Self::generate();
        fs::write(path, cipher.encoded_key())?;
        tracing::debug!(path = %path.display(), "generated new encryption key");
        Ok(cipher)
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, TaskError> {
        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);

        let cipher = Aes128Cbc::new_from_slices(&self.encryption_key, &iv).map_err(|e| TaskError::Encryption(e.to_string()))?;
        let ciphertext = cipher.encrypt_vec(plaintext);

        let mut token = Vec::with_capacity(HEADER_LEN + ciphertext.len() + TAG_LEN);
        token.push(TOKEN_VERSION);
        token.extend_from_slice(&timestamp.to_be_bytes());
        token.extend_from_slice(&iv);
        token.extend_from_slice(&ciphertext);

        let mut mac = HmacSha256::new_from_slice(&self.signing_key).map_err(|e| TaskError::Encryption(e.to_string()))?;
        mac.update(&token);
        token.extend_from_slice(&mac.finalize().into_bytes());

        Ok(BASE64_URL_SAFE.encode(token).into_bytes())
    }

    pub fn decrypt(&self, token: &[u8]) -> Result<Vec<u8>, TaskError> {
        let encoded = std::str::from_utf8(token).map_err(|_| TaskError::Decryption("token is not valid text".to_string()))?;
        let data = BASE64_URL_SAFE
            .decode(encoded.trim())
            .map_err(|_| TaskError::Decryption("token is not valid base64".to_string()))?;

        if data.len() < HEADER_LEN + BLOCK_LEN + TAG_LEN {
            return Err(TaskError::Decryption("token is too short".to_string()));
        }
        if data[0] != TOKEN_VERSION {
            return Err(TaskError::Decryption("unsupported token version".to_string()));
        }

        let (signed, tag) = data.split_at(data.len() - TAG_LEN);
        let mut mac = HmacSha256::new_from_slice(&self.signing_key).map_err(|e| TaskError::Decryption(e.to_string()))?;
        mac.update(signed);
        mac.verify_slice(tag)
            .map_err(|_| TaskError::Decryption("token signature does not match".to_string()))?;

        let iv = &signed[1 + 8..HEADER_LEN];
        let ciphertext = &signed[HEADER_LEN..];
        if ciphertext.len() % BLOCK_LEN != 0 {
            return Err(TaskError::Decryption("ciphertext is not block aligned".to_string()));
        }

        let cipher = Aes128Cbc::new_from_slices(&self.encryption_key, iv).map_err(|e| TaskError::Decryption(e.to_string()))?;
        cipher.decrypt_vec(ciphertext).map_err(|e| TaskError::Decryption(e.to_string()))
    }
}

/// Loads (or creates) the installation key and caches it for the process.
///
/// Subsequent calls return the cached key, even when given another storage.
pub fn init(storage: &DataStorage) -> Result<&'static Cipher, TaskError> {
    if let Some(cipher) = CIPHER.get() {
        return Ok(cipher);
    }
    let path = storage.get_path(KEY_FILE_NAME)?;
    let cipher = Cipher::ensure_key(&path)?;
    Ok(CIPHER.get_or_init(|| cipher))
}

/// Returns the cached key, or [`TaskError::KeyMissing`] before [`init`].
pub fn global() -> Result<&'static Cipher, TaskError> {
    CIPHER.get().ok_or(TaskError::KeyMissing)
}

pub fn encrypt(plaintext: &[u8]) -> Result<Vec<u8>, TaskError> {
    global()?.encrypt(plaintext)
}

pub fn decrypt(token: &[u8]) -> Result<Vec<u8>, TaskError> {
    global()?.decrypt(token)
}
