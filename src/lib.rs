//! # TaskPilot
//!
//! A personal task manager for the terminal with encrypted storage.
//!
//! ## Features
//!
//! - **Encrypted Store**: every owner's task list is one authenticated,
//!   encrypted document; a single key file serves all owners
//! - **Recurring Tasks**: daily, weekly and monthly (fixed 30 day) repeats
//! - **Alarms**: a background scanner fires due tasks once per due minute
//! - **Reports**: daily, weekly and monthly completion rates
//! - **Export**: JSON and CSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpilot::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
