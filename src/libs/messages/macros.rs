//! Output macros shared by every command and background component.
//!
//! Each macro takes anything that implements `Display` (normally a
//! [`Message`](super::Message)) and decides where it goes:
//!
//! - normal mode: `println!` / `eprintln!` with an emoji prefix
//! - debug mode (`TASKPILOT_DEBUG` or `RUST_LOG` set): the matching `tracing`
//!   level, so the output carries timestamps and targets from the subscriber
//!   installed in `main`
//!
//! ```text
//! msg_info!(msg) ──▶ is_debug_mode()? ──yes──▶ tracing::info!("ℹ️ {msg}")
//!                                     └─no───▶ println!("ℹ️ {msg}")
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use taskpilot::libs::messages::Message;
//! use taskpilot::{msg_info, msg_success, msg_warning};
//!
//! msg_success!(Message::TaskCreated("Pay rent".to_string()));
//! msg_info!(Message::UpcomingHeader(60), true);
//! msg_warning!(Message::WatcherNotRunning);
//! ```
//!
//! Errors meant for `anyhow` propagation:
//!
//! ```rust
//! use taskpilot::libs::messages::Message;
//! use taskpilot::msg_bail_anyhow;
//!
//! fn stop() -> anyhow::Result<()> {
//!     msg_bail_anyhow!(Message::ProcessTerminationNotSupported);
//! }
//! assert!(stop().is_err());
//! ```

use std::sync::OnceLock;

/// Environment variable that switches the macros over to `tracing`.
pub const DEBUG_ENV: &str = "TASKPILOT_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether debug output is enabled. Checked once per process and cached.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without a prefix.
///
/// Pass `true` as the second argument to surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints a message with a ❌ prefix to stderr, or to `tracing::error!` in
/// debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a message with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints a message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only output. Nothing is printed in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
