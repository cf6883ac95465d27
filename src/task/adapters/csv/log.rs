//! Flat-file status-change log repository.

use super::rows::LogRowCodec;
use super::{append_record, read_records, rewrite_records};
use crate::task::domain::{StatusChange, TaskCode};
use crate::task::ports::StatusLogRepository;
use camino::Utf8PathBuf;
use cap_std::fs_utf8::Dir;

/// Status-log repository over one delimited file.
///
/// Append-only in normal operation; the task-delete cascade is the only
/// rewrite.
#[derive(Debug)]
pub struct CsvStatusLogRepository {
    dir: Dir,
    file_name: Utf8PathBuf,
}

impl CsvStatusLogRepository {
    /// Creates a repository reading `file_name` inside `dir`.
    #[must_use]
    pub const fn new(dir: Dir, file_name: Utf8PathBuf) -> Self {
        Self { dir, file_name }
    }
}

impl StatusLogRepository for CsvStatusLogRepository {
    fn save(&self, entry: &StatusChange) {
        append_record::<LogRowCodec>(&self.dir, &self.file_name, entry);
    }

    fn delete_by_task_code(&self, code: TaskCode) {
        let remaining: Vec<StatusChange> =
            read_records::<LogRowCodec>(&self.dir, &self.file_name)
                .into_iter()
                .filter(|entry| entry.task_code() != code)
                .collect();
        rewrite_records::<LogRowCodec>(&self.dir, &self.file_name, &remaining);
    }
}
