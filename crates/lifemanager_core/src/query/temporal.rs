//! Temporal classification of tasks.

use crate::model::task::Task;
use chrono::NaiveDate;

/// `true` when the task is due on `today`. Malformed dates never match.
pub fn is_due_today(task: &Task, today: NaiveDate) -> bool {
    task.due_date() == Some(today)
}

/// `true` when the task is due strictly after `today`.
pub fn is_upcoming(task: &Task, today: NaiveDate) -> bool {
    task.due_date().is_some_and(|date| date > today)
}

/// `true` when the task is still open and its date is before `today`.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && task.due_date().is_some_and(|date| date < today)
}

/// Tab-level scope of a task view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskBucket {
    #[default]
    All,
    Today,
    Upcoming,
    Completed,
}

impl TaskBucket {
    pub fn contains(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => is_due_today(task, today),
            Self::Upcoming => is_upcoming(task, today),
            Self::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }
}
