//! Error types for task domain validation and parsing.

use super::{TaskCode, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name cannot be stored in a delimited row.
    #[error("task name '{0}' must not contain commas or line breaks")]
    UnstorableTaskName(String),

    /// The requested status change does not follow the sequential
    /// progression.
    #[error(
        "task {code} cannot move from '{from}' to '{to}'; statuses advance one step at a time"
    )]
    InvalidStatusChange {
        /// Code of the task being changed.
        code: TaskCode,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the change requested.
        to: TaskStatus,
    },
}

/// Error returned while parsing status codes from storage or input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("unknown status code {0}, expected 0, 1, or 2")]
pub struct ParseTaskStatusError(pub u8);
