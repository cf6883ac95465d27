//! Service layer for listing, registering, advancing, and deleting tasks.

use crate::task::domain::{
    StatusChange, Task, TaskCode, TaskDomainError, TaskName, TaskStatus, User, UserCode,
};
use crate::task::ports::{StatusLogRepository, TaskRepository, UserRepository};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Expected, user-correctable failures of task operations.
///
/// These are rendered as messages by the presentation layer; they never
/// terminate the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskServiceError {
    /// No user carries the requested code.
    #[error("no user exists with code {0}")]
    UserNotFound(UserCode),

    /// No task carries the requested code.
    #[error("no task exists with code {0}")]
    TaskNotFound(TaskCode),

    /// A task already carries the requested code.
    #[error("a task with code {0} already exists")]
    DuplicateTaskCode(TaskCode),

    /// The task has not reached the terminal status required for deletion.
    #[error("task {0} must be done before it can be deleted")]
    TaskNotDone(TaskCode),

    /// Domain validation rejected the operation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Orchestrates the task, status-log, and user ports.
///
/// Reads go through the task and user ports; every accepted mutation
/// writes the task port first and then appends one audit record, stamped
/// with the injected clock's current date.
#[derive(Clone)]
pub struct TaskService<T, L, U, C>
where
    T: TaskRepository,
    L: StatusLogRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    logs: Arc<L>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<T, L, U, C> TaskService<T, L, U, C>
where
    T: TaskRepository,
    L: StatusLogRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, logs: Arc<L>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            logs,
            users,
            clock,
        }
    }

    /// Renders one line per task, in record order.
    ///
    /// Each line carries the task code, name, status label, and whether the
    /// task is assigned to `login_user` or to another user by name. The
    /// other user's name is re-resolved through the user port so renames in
    /// the user file show up; when the lookup finds nothing, the name
    /// captured when the task was read is used instead.
    #[must_use]
    pub fn list_all(&self, login_user: &User) -> Vec<String> {
        self.tasks
            .find_all()
            .iter()
            .map(|task| self.render_line(task, login_user))
            .collect()
    }

    fn render_line(&self, task: &Task, login_user: &User) -> String {
        let assigned = task.assigned_user();
        let assignment = if assigned.code() == login_user.code() {
            "assigned to you".to_owned()
        } else {
            let name = self
                .users
                .find_by_code(assigned.code())
                .map_or_else(|| assigned.name().to_owned(), |user| user.name().to_owned());
            format!("assigned to {name}")
        };
        format!(
            "{}. {} [{}] ({})",
            task.code(),
            task.name(),
            task.status(),
            assignment
        )
    }

    /// Registers a new task at the initial status and records that status
    /// in the audit log.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::UserNotFound`] when no user carries
    /// `assigned_user_code`, [`TaskServiceError::DuplicateTaskCode`] when a
    /// task with `code` already exists, or a wrapped domain error when
    /// `name` fails validation. Nothing is written on failure.
    pub fn create(
        &self,
        code: TaskCode,
        name: &str,
        assigned_user_code: UserCode,
        login_user: &User,
    ) -> TaskServiceResult<Task> {
        let assigned_user = self
            .users
            .find_by_code(assigned_user_code)
            .ok_or(TaskServiceError::UserNotFound(assigned_user_code))?;

        if self.tasks.find_by_code(code).is_some() {
            return Err(TaskServiceError::DuplicateTaskCode(code));
        }

        let task = Task::new(code, TaskName::new(name)?, assigned_user);
        self.tasks.save(&task);
        self.record_change(&task, login_user);
        Ok(task)
    }

    /// Advances a task's status by exactly one step and records the change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task carries
    /// `code`, or the wrapped [`TaskDomainError::InvalidStatusChange`] when
    /// `new_status` is not one step ahead of the current status. Nothing is
    /// written on failure.
    pub fn change_status(
        &self,
        code: TaskCode,
        new_status: TaskStatus,
        login_user: &User,
    ) -> TaskServiceResult<Task> {
        let mut task = self
            .tasks
            .find_by_code(code)
            .ok_or(TaskServiceError::TaskNotFound(code))?;

        task.advance_to(new_status)?;
        self.tasks.update(&task);
        self.record_change(&task, login_user);
        Ok(task)
    }

    /// Deletes a done task and cascades the deletion to its audit records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task carries
    /// `code`, or [`TaskServiceError::TaskNotDone`] when the task has not
    /// reached the terminal status. Nothing is written on failure.
    pub fn delete(&self, code: TaskCode) -> TaskServiceResult<()> {
        let task = self
            .tasks
            .find_by_code(code)
            .ok_or(TaskServiceError::TaskNotFound(code))?;

        if !task.status().is_terminal() {
            return Err(TaskServiceError::TaskNotDone(code));
        }

        self.tasks.delete(code);
        self.logs.delete_by_task_code(code);
        Ok(())
    }

    /// Appends one audit record for `task`'s current status, dated today.
    fn record_change(&self, task: &Task, login_user: &User) {
        let entry = StatusChange::new(
            task.code(),
            login_user.code(),
            task.status(),
            self.clock.local().date_naive(),
        );
        self.logs.save(&entry);
    }
}
