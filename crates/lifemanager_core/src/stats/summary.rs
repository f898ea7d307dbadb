//! Dashboard-level counters computed in one pass over a snapshot.

use crate::model::goal::Goal;
use crate::model::task::Task;
use crate::query::temporal::{is_due_today, is_overdue};
use crate::stats::aggregate::{completion_rate, is_this_week};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_tasks: usize,
    pub due_today: usize,
    pub overdue: usize,
    pub completed_tasks: usize,
    /// Whole percent, see [`completion_rate`].
    pub completion_rate: u32,
    pub tasks_this_week: usize,
    pub total_goals: usize,
    pub goals_in_progress: usize,
    pub achieved_goals: usize,
}

impl DashboardSummary {
    pub fn compute(tasks: &[Task], goals: &[Goal], today: NaiveDate) -> Self {
        let achieved_goals = goals.iter().filter(|goal| goal.completed).count();
        Self {
            total_tasks: tasks.len(),
            due_today: tasks.iter().filter(|task| is_due_today(task, today)).count(),
            overdue: tasks.iter().filter(|task| is_overdue(task, today)).count(),
            completed_tasks: tasks.iter().filter(|task| task.completed).count(),
            completion_rate: completion_rate(tasks),
            tasks_this_week: tasks.iter().filter(|task| is_this_week(task, today)).count(),
            total_goals: goals.len(),
            goals_in_progress: goals.len() - achieved_goals,
            achieved_goals,
        }
    }
}
