//! Validation errors shared by task and goal creation paths.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection reasons for record candidates and progress updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Title is blank after trim.
    EmptyTitle,
    /// Date is missing or not `YYYY-MM-DD`.
    InvalidDate(String),
    /// Time is present but not a valid `HH:MM`.
    InvalidTime(String),
    /// Priority text is not one of `Low|Medium|High`.
    InvalidPriority(String),
    /// Goal progress outside `0..=100`.
    ProgressOutOfRange(i64),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be blank"),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidTime(value) => write!(f, "invalid time `{value}`; expected HH:MM"),
            Self::InvalidPriority(value) => {
                write!(f, "invalid priority `{value}`; expected Low|Medium|High")
            }
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress {value} is outside 0..=100")
            }
        }
    }
}

impl Error for RecordValidationError {}

pub(crate) fn normalize_title(title: &str) -> Result<String, RecordValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(RecordValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
