//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted Task record and its priority scale.
//! - Validate `NewTask` candidates into records.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - Records created through `NewTask::into_task` carry a non-empty title,
//!   a valid `date` and a normalized `HH:MM` time when one is set.
//! - Loaded records keep their raw `date`/`time` text even when malformed;
//!   readers substitute defaults instead of failing.
//! - `completed = true` is terminal; only deletion follows it.

use crate::calendar::{format_date, format_time, parse_date, parse_time};
use crate::model::validation::{normalize_title, RecordValidationError};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Task priority scale, persisted as `Low|Medium|High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Ordering weight where higher is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl FromStr for Priority {
    type Err = RecordValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(RecordValidationError::InvalidPriority(value.to_string())),
        }
    }
}

/// Persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned on first load when the file predates ids.
    #[serde(default = "Uuid::new_v4")]
    pub id: TaskId,
    #[serde(default)]
    pub title: String,
    /// Due date as persisted (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    /// Optional `HH:MM`; absence sorts as `00:00`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Stamped when the task transitions to completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
}

impl Task {
    /// Parsed due date, `None` when the persisted text is malformed.
    pub fn due_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Parsed time-of-day, `None` when absent or malformed.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        self.time.as_deref().and_then(parse_time)
    }

    /// Parsed completion date, `None` when unset or malformed.
    pub fn completed_on(&self) -> Option<NaiveDate> {
        self.completion_date.as_deref().and_then(parse_date)
    }

    /// Applies the one-way `Open -> Completed` transition.
    ///
    /// Returns `false` when the task was already completed; the original
    /// completion date is kept in that case.
    pub(crate) fn mark_completed(&mut self, on: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completion_date = Some(format_date(on));
        true
    }
}

/// Creation candidate for a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    /// Required `YYYY-MM-DD` date.
    pub date: String,
    /// Optional `HH:MM`; blank is treated as absent.
    pub time: Option<String>,
    pub priority: Priority,
    pub description: String,
}

impl NewTask {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validates the candidate and builds an open task with a fresh id.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank.
    /// - `InvalidDate` when `date` is not `YYYY-MM-DD`.
    /// - `InvalidTime` when `time` is set but not `HH:MM`.
    pub fn into_task(self) -> Result<Task, RecordValidationError> {
        let title = normalize_title(&self.title)?;
        let date = parse_date(&self.date)
            .ok_or_else(|| RecordValidationError::InvalidDate(self.date.clone()))?;
        let time = match self.time.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let parsed = parse_time(raw)
                    .ok_or_else(|| RecordValidationError::InvalidTime(raw.to_string()))?;
                Some(format_time(parsed))
            }
        };

        Ok(Task {
            id: Uuid::new_v4(),
            title,
            date: format_date(date),
            time,
            priority: self.priority,
            description: self.description.trim().to_string(),
            completed: false,
            completion_date: None,
        })
    }
}

fn deserialize_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default())
}
