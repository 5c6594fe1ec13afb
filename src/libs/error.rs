//! Error taxonomy for the task store, cipher and alarm engine.
//!
//! Library code returns [`TaskError`]; the command layer converts it into
//! user-facing messages through `anyhow`. None of these errors are meant to
//! terminate the process: load failures fall back to an empty task list and
//! scanner failures are logged and skipped.

use crate::libs::task::TaskId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// The process-wide key was used before `secret::init` ran.
    #[error("encryption key is not initialized")]
    KeyMissing,

    #[error("unable to encrypt data: {0}")]
    Encryption(String),

    /// The token is malformed, was produced with another key, or was tampered with.
    #[error("unable to decrypt data: {0}")]
    Decryption(String),

    /// The store exists but could not be decrypted or parsed.
    #[error("failed to load tasks from '{path}': {reason}")]
    Load { path: PathBuf, reason: String },

    /// The store could not be written.
    #[error("failed to save tasks to '{path}': {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("date format not recognized: '{0}'. Use YYYY-MM-DD, DD-MM-YYYY, DD/MM/YYYY, MM-DD-YYYY or YYYY/MM/DD")]
    DateParse(String),

    #[error("time format not recognized: '{0}'. Try '12:30 PM', '23:30' or '12.30 PM'")]
    TimeParse(String),

    #[error("no task at position {0}")]
    NoTaskAtPosition(usize),

    #[error("task with id {0} not found")]
    NotFound(TaskId),

    /// The store actor has shut down and can no longer accept requests.
    #[error("task store is not available")]
    StoreClosed,

    #[error("notification failed: {0}")]
    Notify(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for TaskError {
    fn from(error: serde_json::Error) -> Self {
        TaskError::Serialization(error.to_string())
    }
}

impl From<csv::Error> for TaskError {
    fn from(error: csv::Error) -> Self {
        TaskError::Serialization(error.to_string())
    }
}
