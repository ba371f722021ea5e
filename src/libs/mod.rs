pub mod access;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod lifecycle;
pub mod logging;
pub mod messages;
pub mod report;
pub mod task;
pub mod user;
pub mod validation;
pub mod view;
