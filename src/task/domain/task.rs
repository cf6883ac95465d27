//! Task aggregate and its guarded status progression.

use super::{TaskCode, TaskDomainError, TaskName, TaskStatus, User};
use serde::{Deserialize, Serialize};

/// A unit of work assigned to a user.
///
/// The status is mutated only through [`Task::advance_to`], which enforces
/// the sequential progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    code: TaskCode,
    name: TaskName,
    status: TaskStatus,
    assigned_user: User,
}

impl Task {
    /// Creates a new task at the initial status.
    #[must_use]
    pub const fn new(code: TaskCode, name: TaskName, assigned_user: User) -> Self {
        Self {
            code,
            name,
            status: TaskStatus::NotStarted,
            assigned_user,
        }
    }

    /// Reconstructs a task from persisted fields.
    #[must_use]
    pub const fn from_persisted(
        code: TaskCode,
        name: TaskName,
        status: TaskStatus,
        assigned_user: User,
    ) -> Self {
        Self {
            code,
            name,
            status,
            assigned_user,
        }
    }

    /// Returns the task code.
    #[must_use]
    pub const fn code(&self) -> TaskCode {
        self.code
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the progression status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the user responsible for the task.
    #[must_use]
    pub const fn assigned_user(&self) -> &User {
        &self.assigned_user
    }

    /// Advances the status to `target`.
    ///
    /// Statuses move strictly forward one step at a time; any other change
    /// is rejected and the task is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusChange`] when `target` is
    /// not exactly one step ahead of the current status.
    pub fn advance_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_advance_to(target) {
            return Err(TaskDomainError::InvalidStatusChange {
                code: self.code,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}
