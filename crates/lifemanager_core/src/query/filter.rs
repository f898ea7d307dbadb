//! Text filtering and composed task views.

use crate::model::task::Task;
use crate::query::group::{group_by_day, DayGroup};
use crate::query::sort::{sort_tasks, TaskSortKey};
use crate::query::temporal::TaskBucket;
use chrono::NaiveDate;

/// Case-insensitive substring match on title or description.
///
/// A blank filter matches every task.
pub fn matches_text(task: &Task, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

/// Criteria for one task view: bucket AND text, then ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub bucket: TaskBucket,
    pub text: String,
    pub sort: TaskSortKey,
}

impl TaskQuery {
    pub fn new(bucket: TaskBucket) -> Self {
        Self {
            bucket,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn sorted_by(mut self, sort: TaskSortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Returns matching tasks in the requested order.
    pub fn run<'a>(&self, tasks: &'a [Task], today: NaiveDate) -> Vec<&'a Task> {
        let mut matched: Vec<&Task> = tasks
            .iter()
            .filter(|task| self.bucket.contains(task, today))
            .filter(|task| matches_text(task, &self.text))
            .collect();
        sort_tasks(&mut matched, self.sort);
        matched
    }

    /// Returns matching tasks grouped by day, in sorted first-seen order.
    pub fn run_grouped<'a>(&self, tasks: &'a [Task], today: NaiveDate) -> Vec<DayGroup<'a>> {
        group_by_day(&self.run(tasks, today), today)
    }
}
