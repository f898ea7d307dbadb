//! Stable task orderings.
//!
//! Substitution policy:
//! - by time: absent or malformed `time` sorts as `00:00`;
//! - by date-time: absent `time`, or `time` without a `:`, counts as
//!   `00:00`; a malformed `date`, or a `:` time that does not parse, sorts
//!   after every valid task.

use crate::model::task::Task;
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use log::debug;
use std::cmp::Reverse;

/// Ordering applied to a task view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskSortKey {
    /// Minute of day, ascending.
    Time,
    /// Date then time, ascending.
    #[default]
    DateTime,
    /// High, Medium, Low.
    Priority,
    /// Case-sensitive lexicographic title order.
    Title,
}

/// Sorts `tasks` in place; every key is a stable sort.
pub fn sort_tasks(tasks: &mut [&Task], key: TaskSortKey) {
    match key {
        TaskSortKey::Time => tasks.sort_by_key(|task| minute_of_day(task)),
        TaskSortKey::DateTime => tasks.sort_by_key(|task| datetime_key(task)),
        TaskSortKey::Priority => tasks.sort_by_key(|task| Reverse(task.priority.rank())),
        TaskSortKey::Title => tasks.sort_by(|left, right| left.title.cmp(&right.title)),
    }
}

/// Minute of day used by the time ordering.
pub fn minute_of_day(task: &Task) -> u32 {
    match task.time_of_day() {
        Some(time) => time.hour() * 60 + time.minute(),
        None => {
            if task.time.is_some() {
                debug!(
                    "event=sort_substitute module=query field=time task_id={} value=00:00",
                    task.id
                );
            }
            0
        }
    }
}

/// Combined date-time used by the date-time ordering.
pub fn datetime_key(task: &Task) -> NaiveDateTime {
    let Some(date) = task.due_date() else {
        debug!(
            "event=sort_substitute module=query field=date task_id={} value=max",
            task.id
        );
        return NaiveDateTime::MAX;
    };
    let time = match task.time.as_deref() {
        Some(raw) if raw.contains(':') => match task.time_of_day() {
            Some(time) => time,
            None => {
                debug!(
                    "event=sort_substitute module=query field=time task_id={} value=max",
                    task.id
                );
                return NaiveDateTime::MAX;
            }
        },
        _ => NaiveTime::MIN,
    };
    date.and_time(time)
}
