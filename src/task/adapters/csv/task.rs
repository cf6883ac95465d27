//! Flat-file task repository with assigned-user hydration.

use super::rows::{TaskRow, TaskRowCodec};
use super::{append_record, read_records, rewrite_records};
use crate::task::domain::{Task, TaskCode, TaskName};
use crate::task::ports::{TaskRepository, UserRepository};
use camino::Utf8PathBuf;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;
use tracing::warn;

/// Task repository over one delimited file.
///
/// Rows store the assigned user by code; reads resolve the code to a full
/// record through the user port. Updates and deletes rewrite the whole file
/// behind the constant header row, so they are linear in the number of
/// tasks and unsafe under concurrent writers.
#[derive(Debug)]
pub struct CsvTaskRepository<U> {
    dir: Dir,
    file_name: Utf8PathBuf,
    users: Arc<U>,
}

impl<U: UserRepository> CsvTaskRepository<U> {
    /// Creates a repository reading `file_name` inside `dir`, resolving
    /// assigned users through `users`.
    #[must_use]
    pub const fn new(dir: Dir, file_name: Utf8PathBuf, users: Arc<U>) -> Self {
        Self {
            dir,
            file_name,
            users,
        }
    }

    /// Hydrates one storage row, skipping rows that no longer reference an
    /// existing user or whose stored name fails validation.
    fn hydrate(&self, row: TaskRow) -> Option<Task> {
        let Some(user) = self.users.find_by_code(row.assigned_user_code) else {
            warn!(
                task = %row.code,
                user = %row.assigned_user_code,
                "skipping task row with unresolvable assigned user"
            );
            return None;
        };
        match TaskName::new(row.name) {
            Ok(name) => Some(Task::from_persisted(row.code, name, row.status, user)),
            Err(err) => {
                warn!(task = %row.code, error = %err, "skipping task row with unstorable name");
                None
            }
        }
    }
}

impl<U: UserRepository> TaskRepository for CsvTaskRepository<U> {
    fn find_all(&self) -> Vec<Task> {
        read_records::<TaskRowCodec>(&self.dir, &self.file_name)
            .into_iter()
            .filter_map(|row| self.hydrate(row))
            .collect()
    }

    fn find_by_code(&self, code: TaskCode) -> Option<Task> {
        read_records::<TaskRowCodec>(&self.dir, &self.file_name)
            .into_iter()
            .filter(|row| row.code == code)
            .find_map(|row| self.hydrate(row))
    }

    fn save(&self, task: &Task) {
        append_record::<TaskRowCodec>(&self.dir, &self.file_name, &TaskRow::for_task(task));
    }

    fn update(&self, task: &Task) {
        let rows: Vec<TaskRow> = self
            .find_all()
            .iter()
            .map(|existing| {
                if existing.code() == task.code() {
                    TaskRow::for_task(task)
                } else {
                    TaskRow::for_task(existing)
                }
            })
            .collect();
        rewrite_records::<TaskRowCodec>(&self.dir, &self.file_name, &rows);
    }

    fn delete(&self, code: TaskCode) {
        let rows: Vec<TaskRow> = self
            .find_all()
            .iter()
            .filter(|task| task.code() != code)
            .map(TaskRow::for_task)
            .collect();
        rewrite_records::<TaskRowCodec>(&self.dir, &self.file_name, &rows);
    }
}
