//! Upcoming deadlines within the next seven days.

use crate::model::task::Task;
use chrono::NaiveDate;
use log::debug;

/// Widest window, in days from today, that counts as upcoming.
pub const DEADLINE_WINDOW_DAYS: i64 = 7;

/// Severity of an upcoming deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// `<= 1` day is high, `<= 3` days is medium, anything later is low.
    pub fn for_days_remaining(days: i64) -> Self {
        if days <= 1 {
            Self::High
        } else if days <= 3 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One open task due inside the deadline window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline<'a> {
    pub task: &'a Task,
    pub days_remaining: i64,
    pub urgency: Urgency,
}

impl Deadline<'_> {
    /// `Today!`, `Tomorrow!` or `{n} days`.
    pub fn label(&self) -> String {
        match self.days_remaining {
            0 => "Today!".to_string(),
            1 => "Tomorrow!".to_string(),
            days => format!("{days} days"),
        }
    }
}

/// Open tasks due within `0..=7` days of `today`, nearest first.
///
/// Tasks with malformed dates are skipped.
pub fn upcoming_deadlines(tasks: &[Task], today: NaiveDate) -> Vec<Deadline<'_>> {
    let mut deadlines: Vec<Deadline<'_>> = tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| {
            let Some(date) = task.due_date() else {
                debug!(
                    "event=deadline_skip module=query task_id={} reason=invalid_date",
                    task.id
                );
                return None;
            };
            let days_remaining = (date - today).num_days();
            (0..=DEADLINE_WINDOW_DAYS)
                .contains(&days_remaining)
                .then(|| Deadline {
                    task,
                    days_remaining,
                    urgency: Urgency::for_days_remaining(days_remaining),
                })
        })
        .collect();
    deadlines.sort_by_key(|deadline| deadline.days_remaining);
    deadlines
}
