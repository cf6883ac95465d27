//! Port contracts for task tracking.
//!
//! Ports define storage-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{StatusLogRepository, TaskRepository, UserRepository};
