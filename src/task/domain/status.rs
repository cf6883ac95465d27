//! Task progression status and its sequential state machine.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progression status of a task.
///
/// Statuses advance strictly forward one step at a time: a task starts at
/// [`TaskStatus::NotStarted`], moves to [`TaskStatus::InProgress`], and
/// ends at [`TaskStatus::Done`]. No transition leaves `Done`; deletion is
/// the only exit from the terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not begun.
    NotStarted,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Returns the numeric storage representation.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::NotStarted => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Parses the numeric storage representation.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] when the value is not 0, 1, or 2.
    pub const fn from_code(code: u8) -> Result<Self, ParseTaskStatusError> {
        match code {
            0 => Ok(Self::NotStarted),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Done),
            other => Err(ParseTaskStatusError(other)),
        }
    }

    /// Returns the label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    /// Returns the status one step ahead, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns whether a change to `target` follows the sequential
    /// progression.
    #[must_use]
    pub const fn can_advance_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::NotStarted, Self::InProgress) | (Self::InProgress, Self::Done)
        )
    }

    /// Returns whether no further transition exists from this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
