//! Persistence layer for taskman.
//!
//! State lives in two plain-text files, one for users and one for tasks.
//! [`store::RecordStore`] reads and writes them whole; the repositories on
//! top of it ([`users::Users`], [`tasks::Tasks`]) run each operation as
//! load snapshot → apply rule → save snapshot.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::db::{store::RecordStore, tasks::Tasks, users::Users};
//! use taskman::libs::task::NewTask;
//! use taskman::libs::user::Role;
//!
//! let store = RecordStore::in_dir(std::path::Path::new("."));
//! Users::new(store.clone()).register("alice", "secret1", Role::Admin)?;
//!
//! let task = Tasks::new(store).create(NewTask {
//!     owner: "alice".to_string(),
//!     title: "Write report".to_string(),
//!     description: "Quarterly numbers".to_string(),
//!     due_date: "2030-01-31".to_string(),
//! })?;
//! assert_eq!(task.id, 1);
//! # Ok::<(), taskman::libs::error::TaskError>(())
//! ```

pub mod store;
pub mod tasks;
pub mod users;
