//! Day grouping for sorted task lists.
//!
//! Groups are keyed by the parsed date, or by the raw `date` text when it
//! does not parse, and emitted in first-seen order, so concatenating group
//! members reproduces the input order.

use crate::calendar::{day_header, parse_date};
use crate::model::task::Task;
use chrono::NaiveDate;

const UNDATED_HEADER: &str = "No date";

/// One day of tasks with its display header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    /// Persisted date text of the first member.
    pub date: &'a str,
    /// Parsed date; `None` when the text is malformed.
    pub day: Option<NaiveDate>,
    /// `Weekday, Month DD, YYYY` plus `(Today)`/`(Tomorrow)`; malformed
    /// dates fall back to the raw text.
    pub header: String,
    pub tasks: Vec<&'a Task>,
}

/// Partitions an already sorted list into day groups.
pub fn group_by_day<'a>(sorted: &[&'a Task], today: NaiveDate) -> Vec<DayGroup<'a>> {
    let mut groups: Vec<DayGroup<'a>> = Vec::new();
    for &task in sorted {
        let day = parse_date(&task.date);
        let existing = groups.iter_mut().find(|group| match day {
            Some(day) => group.day == Some(day),
            None => group.day.is_none() && group.date == task.date,
        });
        if let Some(group) = existing {
            group.tasks.push(task);
            continue;
        }
        let header = match day {
            Some(day) => day_header(day, today),
            None if task.date.trim().is_empty() => UNDATED_HEADER.to_string(),
            None => task.date.clone(),
        };
        groups.push(DayGroup {
            date: task.date.as_str(),
            day,
            header,
            tasks: vec![task],
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::group_by_day;
    use crate::calendar::parse_date;
    use crate::model::task::{NewTask, Task};

    fn task(date: &str) -> Task {
        let mut task = NewTask::new("fixture", "2024-01-10").into_task().unwrap();
        task.date = date.to_string();
        task
    }

    #[test]
    fn padded_and_plain_date_text_share_one_group() {
        let today = parse_date("2024-01-10").unwrap();
        let plain = task("2024-01-10");
        let padded = task(" 2024-01-10");
        let broken = task("soon");
        let broken_again = task("soon");

        let groups = group_by_day(&[&plain, &padded, &broken, &broken_again], today);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].tasks.len(), 2);
        assert_eq!(groups[0].header, "Wednesday, January 10, 2024 (Today)");
        assert_eq!(groups[1].day, None);
        assert_eq!(groups[1].tasks.len(), 2);
    }
}
