//! Summary statistics over task and goal snapshots.

use crate::calendar::weekday_short;
use crate::model::goal::Goal;
use crate::model::task::Task;
use chrono::{Datelike, Duration, NaiveDate};

/// Bucket label for goals without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Length of the completion trend series.
pub const TREND_DAYS: usize = 7;

/// Completed share of all tasks in whole percent; `0` for no tasks.
///
/// Halves round to even, so 12.5 becomes 12 and 37.5 becomes 38.
pub fn completion_rate(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|task| task.completed).count();
    let rate = completed as f64 / tasks.len() as f64 * 100.0;
    rate.round_ties_even() as u32
}

/// Goal count for one category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Goal counts per category in first-encountered order.
pub fn category_breakdown(goals: &[Goal]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for goal in goals {
        let label = goal
            .category
            .as_ref()
            .map(|category| category.label().trim())
            .filter(|label| !label.is_empty())
            .unwrap_or(UNCATEGORIZED);
        match counts.iter_mut().find(|entry| entry.category == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: label.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

/// Completed-task count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCompletion {
    pub date: NaiveDate,
    pub count: usize,
}

impl DailyCompletion {
    /// `Mon`..`Sun`, used as the trend axis label.
    pub fn weekday_label(&self) -> String {
        weekday_short(self.date)
    }
}

/// Completed tasks per day from `reference - 6` through `reference`.
///
/// Tasks count on the day of their `completion_date`; tasks without a
/// parseable completion date are ignored.
pub fn weekly_completion(tasks: &[Task], reference: NaiveDate) -> Vec<DailyCompletion> {
    (0..TREND_DAYS as i64)
        .rev()
        .map(|offset| reference - Duration::days(offset))
        .map(|date| DailyCompletion {
            date,
            count: tasks
                .iter()
                .filter(|task| task.completed && task.completed_on() == Some(date))
                .count(),
        })
        .collect()
}

/// `true` when the task date falls in the Monday-Sunday week of `reference`.
pub fn is_this_week(task: &Task, reference: NaiveDate) -> bool {
    let Some(date) = task.due_date() else {
        return false;
    };
    let monday =
        reference - Duration::days(i64::from(reference.weekday().num_days_from_monday()));
    let sunday = monday + Duration::days(6);
    (monday..=sunday).contains(&date)
}

/// Goals split by achievement, each side in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalProgressOverview<'a> {
    pub in_progress: Vec<&'a Goal>,
    pub achieved: Vec<&'a Goal>,
}

pub fn goal_progress_overview(goals: &[Goal]) -> GoalProgressOverview<'_> {
    let (achieved, in_progress): (Vec<&Goal>, Vec<&Goal>) =
        goals.iter().partition(|goal| goal.completed);
    GoalProgressOverview {
        in_progress,
        achieved,
    }
}
