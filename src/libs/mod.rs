//! Core library modules for the taskpilot application.
//!
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`], [`messages`]
//! - **Security**: [`secret`] holds the process-wide cipher
//! - **Tasks**: [`task`] (model, parsing, filters) and [`recurrence`]
//! - **Alarms**: [`alarm`] scanner, [`notifier`] delivery, [`daemon`] lifecycle
//! - **Output**: [`report`], [`view`], [`export`]

pub mod alarm;
pub mod config;
pub mod daemon;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod messages;
pub mod notifier;
pub mod recurrence;
pub mod report;
pub mod secret;
pub mod task;
pub mod view;
