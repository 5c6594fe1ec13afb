//! User-facing text for the whole application.
//!
//! Commands pick a [`Message`] variant and hand it to one of the `msg_*`
//! macros from [`macros`]; the wording itself lives in [`display`].

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
