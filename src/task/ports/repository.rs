//! Repository ports for user, task, and status-log storage.
//!
//! All lookups are first-match in record order. None of the contracts carry
//! a storage-error channel: implementations log I/O failures to the
//! diagnostic stream and degrade to an empty read or a no-op write, so
//! callers observe absence rather than a distinct storage error. Higher
//! layers are written against that behaviour.

use crate::task::domain::{StatusChange, Task, TaskCode, User, UserCode};

/// Read-only lookup over user reference data.
pub trait UserRepository: Send + Sync {
    /// Finds the first user with the given code.
    ///
    /// Returns `None` when no record matches or the backing store is
    /// unreadable.
    fn find_by_code(&self, code: UserCode) -> Option<User>;

    /// Finds the first user matching both credentials exactly,
    /// case-sensitively.
    ///
    /// Returns `None` when no record matches or the backing store is
    /// unreadable.
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<User>;
}

/// Persistence contract for task records.
pub trait TaskRepository: Send + Sync {
    /// Returns every well-formed task in record order.
    fn find_all(&self) -> Vec<Task>;

    /// Finds the first task with the given code.
    fn find_by_code(&self, code: TaskCode) -> Option<Task>;

    /// Appends one task record.
    ///
    /// No uniqueness check happens here; callers enforce code uniqueness
    /// before saving.
    fn save(&self, task: &Task);

    /// Replaces the record whose code matches `task`, leaving the relative
    /// order of records unchanged.
    fn update(&self, task: &Task);

    /// Removes the record with the given code, if present.
    fn delete(&self, code: TaskCode);
}

/// Persistence contract for status-change audit records.
pub trait StatusLogRepository: Send + Sync {
    /// Appends one audit record.
    fn save(&self, entry: &StatusChange);

    /// Removes every audit record for the given task code.
    fn delete_by_task_code(&self, code: TaskCode);
}
