//! Audit records for accepted status changes.

use super::{TaskCode, TaskStatus, UserCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One immutable audit record of a status change.
///
/// A record is appended for every accepted change, including the implicit
/// initial status written when a task is registered. Records are never
/// mutated; the task-delete cascade is the only way they are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    task_code: TaskCode,
    changed_by: UserCode,
    status: TaskStatus,
    changed_on: NaiveDate,
}

impl StatusChange {
    /// Creates an audit record for one status change.
    #[must_use]
    pub const fn new(
        task_code: TaskCode,
        changed_by: UserCode,
        status: TaskStatus,
        changed_on: NaiveDate,
    ) -> Self {
        Self {
            task_code,
            changed_by,
            status,
            changed_on,
        }
    }

    /// Returns the code of the task that changed.
    #[must_use]
    pub const fn task_code(&self) -> TaskCode {
        self.task_code
    }

    /// Returns the code of the user who performed the change.
    #[must_use]
    pub const fn changed_by(&self) -> UserCode {
        self.changed_by
    }

    /// Returns the status the task held after the change.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the calendar date of the change.
    #[must_use]
    pub const fn changed_on(&self) -> NaiveDate {
        self.changed_on
    }
}
