//! User-facing text and the macros that print it.
//!
//! Every line the interactive front end shows is a [`Message`] variant. The
//! `msg_*!` macros print a message to the console, or route it through
//! `tracing` when `TASKMAN_DEBUG` or `RUST_LOG` is set.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
