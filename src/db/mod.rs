//! Persistence layer for the taskpilot application.
//!
//! Each owner's tasks live in one encrypted JSON document that is fully
//! rewritten on every change. Nothing is updated in place: a mutation loads
//! the list, changes it in memory and saves it back.
//!
//! - [`tasks`]: the on-disk store ([`tasks::TaskStore`]) and owner partitioning
//! - [`actor`]: the in-process actor that serializes all store mutations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpilot::db::{actor, tasks::{Owner, TaskStore}};
//! use taskpilot::libs::{data_storage::DataStorage, secret, task::NewTask};
//!
//! # async fn demo() -> Result<(), taskpilot::libs::error::TaskError> {
//! let storage = DataStorage::new();
//! let cipher = secret::init(&storage)?.clone();
//! let store = actor::spawn(TaskStore::open(&storage, &Owner::Default, cipher)?);
//! store.add(NewTask::new("Water plants").validate()?).await?;
//! # Ok(())
//! # }
//! ```

pub mod actor;
pub mod tasks;
