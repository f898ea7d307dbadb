//! Goal domain model.
//!
//! # Responsibility
//! - Define the persisted Goal record and its category set.
//! - Validate `NewGoal` candidates and parse milestone text.
//!
//! # Invariants
//! - `progress` is always within `0..=100`, including after load.
//! - `milestones` keep insertion order.
//! - `completed` follows `progress == 100` on progress updates; the
//!   explicit achieve action may set it without touching `progress`.

use crate::calendar::{format_date, parse_date};
use crate::model::validation::{normalize_title, RecordValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a goal.
pub type GoalId = Uuid;

/// Upper bound of goal progress, in percent.
pub const MAX_PROGRESS: u8 = 100;

/// Goal category; unknown labels are kept verbatim as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalCategory {
    Personal,
    Professional,
    Health,
    Financial,
    Educational,
    Custom(String),
}

impl GoalCategory {
    /// Built-in categories in display order.
    pub const BUILT_IN: [GoalCategory; 5] = [
        GoalCategory::Personal,
        GoalCategory::Professional,
        GoalCategory::Health,
        GoalCategory::Financial,
        GoalCategory::Educational,
    ];

    /// Resolves user input against the built-in labels case-insensitively;
    /// anything else becomes a trimmed `Custom` category.
    pub fn parse_label(raw: &str) -> GoalCategory {
        let trimmed = raw.trim();
        Self::BUILT_IN
            .iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| GoalCategory::Custom(trimmed.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Personal => "Personal",
            Self::Professional => "Professional",
            Self::Health => "Health",
            Self::Financial => "Financial",
            Self::Educational => "Educational",
            Self::Custom(label) => label.as_str(),
        }
    }
}

impl From<String> for GoalCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Personal" => Self::Personal,
            "Professional" => Self::Professional,
            "Health" => Self::Health,
            "Financial" => Self::Financial,
            "Educational" => Self::Educational,
            _ => Self::Custom(value),
        }
    }
}

impl From<GoalCategory> for String {
    fn from(value: GoalCategory) -> Self {
        match value {
            GoalCategory::Custom(label) => label,
            other => other.label().to_string(),
        }
    }
}

impl Display for GoalCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Persisted goal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default = "Uuid::new_v4")]
    pub id: GoalId,
    #[serde(default)]
    pub title: String,
    /// Target date as persisted (`YYYY-MM-DD`).
    #[serde(default)]
    pub target_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<GoalCategory>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
}

impl Goal {
    /// Parsed target date, `None` when the persisted text is malformed.
    pub fn target(&self) -> Option<NaiveDate> {
        parse_date(&self.target_date)
    }

    /// Sets progress and derives `completed = (progress == 100)`.
    pub(crate) fn set_progress(&mut self, progress: i64) -> Result<(), RecordValidationError> {
        let progress = u8::try_from(progress)
            .ok()
            .filter(|value| *value <= MAX_PROGRESS)
            .ok_or(RecordValidationError::ProgressOutOfRange(progress))?;
        self.progress = progress;
        self.completed = progress == MAX_PROGRESS;
        Ok(())
    }

    /// Marks the goal achieved without touching `progress`.
    pub(crate) fn mark_achieved(&mut self) {
        self.completed = true;
    }
}

/// Creation candidate for a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGoal {
    pub title: String,
    /// Required `YYYY-MM-DD` target date.
    pub target_date: String,
    pub category: Option<GoalCategory>,
    pub description: String,
    /// Free text; one milestone per non-blank line.
    pub milestones_text: String,
}

impl NewGoal {
    pub fn new(title: impl Into<String>, target_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target_date: target_date.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_milestones(mut self, milestones_text: impl Into<String>) -> Self {
        self.milestones_text = milestones_text.into();
        self
    }

    /// Validates the candidate and builds an in-progress goal at 0%.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank.
    /// - `InvalidDate` when `target_date` is not `YYYY-MM-DD`.
    pub fn into_goal(self) -> Result<Goal, RecordValidationError> {
        let title = normalize_title(&self.title)?;
        let target = parse_date(&self.target_date)
            .ok_or_else(|| RecordValidationError::InvalidDate(self.target_date.clone()))?;

        Ok(Goal {
            id: Uuid::new_v4(),
            title,
            target_date: format_date(target),
            category: self.category,
            description: self.description.trim().to_string(),
            milestones: parse_milestones(&self.milestones_text),
            completed: false,
            progress: 0,
        })
    }
}

/// Splits milestone input into trimmed, non-blank lines in input order.
pub fn parse_milestones(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn deserialize_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(0);
    // Clamped, so the cast cannot truncate.
    Ok(raw.clamp(0, i64::from(MAX_PROGRESS)) as u8)
}

#[cfg(test)]
mod tests {
    use super::{parse_milestones, GoalCategory};

    #[test]
    fn milestones_skip_blank_lines_and_keep_order() {
        let parsed = parse_milestones("draft plan\n\n  \r\nship v1\r\nreview\n");
        assert_eq!(parsed, vec!["draft plan", "ship v1", "review"]);
    }

    #[test]
    fn category_round_trips_custom_labels() {
        assert_eq!(
            GoalCategory::from("Health".to_string()),
            GoalCategory::Health
        );
        let custom = GoalCategory::from("Travel".to_string());
        assert_eq!(custom, GoalCategory::Custom("Travel".to_string()));
        assert_eq!(String::from(custom), "Travel");
    }
}
