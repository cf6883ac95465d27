//! Row codec for the delimited storage format.
//!
//! One record per line, fields joined by [`FIELD_DELIMITER`] with no
//! quoting or escaping. Decoding returns `None` for rows with the wrong
//! field count or unparseable numeric fields, and readers skip such rows.
//! Encoding never emits a delimiter inside a field because validated domain
//! values cannot contain one; a free-text field that arrives with an
//! embedded delimiter (for example, a task file edited by hand) splits into
//! extra fields and the row is dropped on the next read.

use crate::task::domain::{StatusChange, Task, TaskCode, TaskStatus, User, UserCode};
use chrono::NaiveDate;

/// Field separator for all backing files.
pub(crate) const FIELD_DELIMITER: char = ',';

/// Decode/encode pair for one record type of the delimited format.
pub(crate) trait RowCodec {
    /// Record type carried by one line.
    type Record;

    /// Header row written as the first line of the backing file.
    const HEADER: &'static str;

    /// Decodes one line, returning `None` for malformed rows.
    fn decode(line: &str) -> Option<Self::Record>;

    /// Encodes one record as a line, without the trailing newline.
    fn encode(record: &Self::Record) -> String;
}

/// Codec for rows of the user file: `code,name,email,password`.
pub(crate) struct UserRowCodec;

impl RowCodec for UserRowCodec {
    type Record = User;

    const HEADER: &'static str = "Code,Name,Email,Password";

    fn decode(line: &str) -> Option<User> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [code, name, email, password] = fields.as_slice() else {
            return None;
        };
        let parsed_code = code.parse::<u32>().ok()?;
        Some(User::new(
            UserCode::new(parsed_code),
            (*name).to_owned(),
            (*email).to_owned(),
            (*password).to_owned(),
        ))
    }

    fn encode(record: &User) -> String {
        format!(
            "{},{},{},{}",
            record.code(),
            record.name(),
            record.email(),
            record.password()
        )
    }
}

/// Storage row of the task file: `code,name,status,assignedUserCode`.
///
/// A row stores only the assigned user's code; adapters resolve the code to
/// a full record through the user port.
pub(crate) struct TaskRow {
    /// Task code.
    pub(crate) code: TaskCode,
    /// Raw task name field.
    pub(crate) name: String,
    /// Progression status.
    pub(crate) status: TaskStatus,
    /// Code of the assigned user.
    pub(crate) assigned_user_code: UserCode,
}

impl TaskRow {
    /// Builds the storage row for a task.
    pub(crate) fn for_task(task: &Task) -> Self {
        Self {
            code: task.code(),
            name: task.name().as_str().to_owned(),
            status: task.status(),
            assigned_user_code: task.assigned_user().code(),
        }
    }
}

/// Codec for rows of the task file.
pub(crate) struct TaskRowCodec;

impl RowCodec for TaskRowCodec {
    type Record = TaskRow;

    const HEADER: &'static str = "Code,Name,Status,Rep_User_Code";

    fn decode(line: &str) -> Option<TaskRow> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [code, name, status, user_code] = fields.as_slice() else {
            return None;
        };
        Some(TaskRow {
            code: TaskCode::new(code.parse().ok()?),
            name: (*name).to_owned(),
            status: TaskStatus::from_code(status.parse().ok()?).ok()?,
            assigned_user_code: UserCode::new(user_code.parse().ok()?),
        })
    }

    fn encode(record: &TaskRow) -> String {
        format!(
            "{},{},{},{}",
            record.code,
            record.name,
            record.status.code(),
            record.assigned_user_code
        )
    }
}

/// Codec for rows of the status-change log file.
pub(crate) struct LogRowCodec;

impl RowCodec for LogRowCodec {
    type Record = StatusChange;

    const HEADER: &'static str = "Task_Code,Change_User_Code,Status,Change_Date";

    fn decode(line: &str) -> Option<StatusChange> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [task_code, user_code, status, date] = fields.as_slice() else {
            return None;
        };
        Some(StatusChange::new(
            TaskCode::new(task_code.parse().ok()?),
            UserCode::new(user_code.parse().ok()?),
            TaskStatus::from_code(status.parse().ok()?).ok()?,
            date.parse::<NaiveDate>().ok()?,
        ))
    }

    fn encode(record: &StatusChange) -> String {
        format!(
            "{},{},{},{}",
            record.task_code(),
            record.changed_by(),
            record.status().code(),
            record.changed_on()
        )
    }
}
