//! # taskman
//!
//! A small multi-user task tracker. Users and tasks live in two plain-text
//! record files with one comma-separated record per line. Admin and Non-Admin
//! roles decide which operations a logged-in user may run.
//!
//! ## Layout
//!
//! - [`libs`]: the engine. Validation, identity, the task lifecycle, reports
//!   and the authorization gate operate on in-memory snapshots.
//! - [`db`]: the record store and the repositories that load a snapshot,
//!   apply one operation and write it back.
//! - [`commands`]: the interactive session and the CLI subcommands.

pub mod commands;
pub mod db;
pub mod libs;
