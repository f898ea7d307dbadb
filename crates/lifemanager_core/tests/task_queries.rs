use chrono::NaiveDate;
use lifemanager_core::{
    group_by_day, is_due_today, is_overdue, is_upcoming, matches_text, sort_tasks,
    upcoming_deadlines, NewTask, Priority, Task, TaskBucket, TaskQuery, TaskSortKey, Urgency,
};

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn task(title: &str, date: &str, time: Option<&str>) -> Task {
    let mut candidate = NewTask::new(title, "2024-01-01");
    if let Some(time) = time {
        candidate = candidate.with_time(time);
    }
    let mut task = candidate.into_task().unwrap();
    // Raw assignment so malformed dates can be exercised.
    task.date = date.to_string();
    task
}

fn titles(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.title.clone()).collect()
}

#[test]
fn temporal_predicates_follow_the_reference_date() {
    let today = date("2024-01-10");
    let due = task("due", "2024-01-10", None);
    let later = task("later", "2024-01-11", None);
    let past = task("past", "2024-01-09", None);
    let broken = task("broken", "10/01/2024", None);

    assert!(is_due_today(&due, today));
    assert!(!is_due_today(&later, today));
    assert!(is_upcoming(&later, today));
    assert!(!is_upcoming(&due, today));
    assert!(is_overdue(&past, today));
    assert!(!is_overdue(&due, today));

    assert!(!is_due_today(&broken, today));
    assert!(!is_upcoming(&broken, today));
    assert!(!is_overdue(&broken, today));
}

#[test]
fn completed_tasks_are_never_overdue() {
    let mut past = task("past", "2020-01-01", None);
    past.completed = true;
    assert!(!is_overdue(&past, date("2024-01-10")));
}

#[test]
fn text_filter_is_case_insensitive_over_title_and_description() {
    let budget = task("Q1 Budget Review", "2024-01-10", None);
    let mut meeting = task("Team Meeting", "2024-01-10", None);

    assert!(matches_text(&budget, "budget"));
    assert!(!matches_text(&meeting, "budget"));
    assert!(matches_text(&meeting, "   "));

    meeting.description = "Discuss BUDGET numbers".to_string();
    assert!(matches_text(&meeting, "budget"));
}

#[test]
fn sort_by_time_puts_earlier_time_first() {
    let nine = task("nine", "2024-01-10", Some("09:00"));
    let half_eight = task("half eight", "2024-01-10", Some("08:30"));
    let mut view = vec![&nine, &half_eight];

    sort_tasks(&mut view, TaskSortKey::Time);

    assert_eq!(titles(&view), vec!["half eight", "nine"]);
}

#[test]
fn sort_by_time_is_stable_and_treats_missing_time_as_midnight() {
    let midnight = task("midnight", "2024-01-10", Some("00:00"));
    let untimed = task("untimed", "2024-01-10", None);
    let mut malformed = task("malformed", "2024-01-10", None);
    malformed.time = Some("soon".to_string());
    let morning = task("morning", "2024-01-10", Some("07:00"));

    let mut once = vec![&morning, &midnight, &untimed, &malformed];
    sort_tasks(&mut once, TaskSortKey::Time);
    let mut twice = once.clone();
    sort_tasks(&mut twice, TaskSortKey::Time);

    assert_eq!(titles(&once), vec!["midnight", "untimed", "malformed", "morning"]);
    assert_eq!(titles(&once), titles(&twice));
}

#[test]
fn sort_by_datetime_sends_unparsable_dates_last() {
    let broken = task("broken", "someday", Some("08:00"));
    let later = task("later", "2024-01-11", Some("08:00"));
    let earlier = task("earlier", "2024-01-10", Some("23:00"));
    let mut view = vec![&broken, &later, &earlier];

    sort_tasks(&mut view, TaskSortKey::DateTime);

    assert_eq!(titles(&view), vec!["earlier", "later", "broken"]);
}

#[test]
fn sort_by_datetime_sends_unparsable_time_last_but_keeps_colonless_at_midnight() {
    let mut bad = task("bad", "2024-01-10", None);
    bad.time = Some("25:00".to_string());
    let ok = task("ok", "2024-01-10", Some("08:00"));
    let mut loose = task("loose", "2024-01-10", None);
    loose.time = Some("soon".to_string());
    let mut view = vec![&bad, &ok, &loose];

    sort_tasks(&mut view, TaskSortKey::DateTime);

    assert_eq!(titles(&view), vec!["loose", "ok", "bad"]);
}

#[test]
fn sort_by_priority_is_high_first_and_stable() {
    let mut low = task("low", "2024-01-10", None);
    low.priority = Priority::Low;
    let mut high_a = task("high a", "2024-01-10", None);
    high_a.priority = Priority::High;
    let medium = task("medium", "2024-01-10", None);
    let mut high_b = task("high b", "2024-01-10", None);
    high_b.priority = Priority::High;
    let mut view = vec![&low, &high_a, &medium, &high_b];

    sort_tasks(&mut view, TaskSortKey::Priority);

    assert_eq!(titles(&view), vec!["high a", "high b", "medium", "low"]);
}

#[test]
fn sort_by_title_is_case_sensitive() {
    let lower = task("apple", "2024-01-10", None);
    let upper = task("Banana", "2024-01-10", None);
    let mut view = vec![&lower, &upper];

    sort_tasks(&mut view, TaskSortKey::Title);

    assert_eq!(titles(&view), vec!["Banana", "apple"]);
}

#[test]
fn grouping_partitions_sorted_input_in_first_seen_order() {
    let today = date("2024-01-10");
    let tasks = vec![
        task("b", "2024-01-11", Some("09:00")),
        task("a", "2024-01-10", Some("10:00")),
        task("c", "2024-01-11", Some("08:00")),
        task("d", "garbage", None),
        task("e", "2024-01-12", None),
    ];
    let sorted = TaskQuery::default().run(&tasks, today);

    let groups = group_by_day(&sorted, today);

    let headers: Vec<&str> = groups.iter().map(|group| group.header.as_str()).collect();
    assert_eq!(
        headers,
        vec![
            "Wednesday, January 10, 2024 (Today)",
            "Thursday, January 11, 2024 (Tomorrow)",
            "Friday, January 12, 2024",
            "garbage",
        ]
    );
    let flattened: Vec<&Task> = groups
        .iter()
        .flat_map(|group| group.tasks.iter().copied())
        .collect();
    assert_eq!(titles(&flattened), titles(&sorted));
    assert_eq!(titles(&groups[1].tasks), vec!["c", "b"]);
}

#[test]
fn bucket_and_text_filter_combine_with_and() {
    let today = date("2024-01-10");
    let mut done = task("Budget done", "2024-01-08", None);
    done.completed = true;
    let tasks = vec![
        task("Budget today", "2024-01-10", Some("09:00")),
        task("Meeting today", "2024-01-10", Some("08:00")),
        task("Budget later", "2024-01-15", None),
        done,
    ];

    let today_budget = TaskQuery::new(TaskBucket::Today)
        .with_text("BUDGET")
        .run(&tasks, today);
    assert_eq!(titles(&today_budget), vec!["Budget today"]);

    let upcoming = TaskQuery::new(TaskBucket::Upcoming).run(&tasks, today);
    assert_eq!(titles(&upcoming), vec!["Budget later"]);

    let completed = TaskQuery::new(TaskBucket::Completed).run(&tasks, today);
    assert_eq!(titles(&completed), vec!["Budget done"]);

    let all_by_time = TaskQuery::new(TaskBucket::All)
        .sorted_by(TaskSortKey::Time)
        .run(&tasks, today);
    assert_eq!(all_by_time.len(), 4);
    assert_eq!(all_by_time[0].title, "Budget later");
}

#[test]
fn grouped_query_runs_filter_sort_and_group() {
    let today = date("2024-01-10");
    let tasks = vec![
        task("later", "2024-01-11", None),
        task("now", "2024-01-10", None),
    ];

    let groups = TaskQuery::default().run_grouped(&tasks, today);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].day, Some(today));
    assert_eq!(groups[0].tasks[0].title, "now");
}

#[test]
fn deadline_three_days_out_is_medium_urgency() {
    let today = date("2024-01-10");
    let tasks = vec![task("report", "2024-01-13", None)];

    let deadlines = upcoming_deadlines(&tasks, today);

    assert_eq!(deadlines.len(), 1);
    assert_eq!(deadlines[0].days_remaining, 3);
    assert_eq!(deadlines[0].label(), "3 days");
    assert_eq!(deadlines[0].urgency, Urgency::Medium);
}

#[test]
fn deadlines_cover_seven_days_nearest_first() {
    let today = date("2024-01-10");
    let mut completed = task("completed", "2024-01-11", None);
    completed.completed = true;
    let tasks = vec![
        task("week", "2024-01-17", None),
        task("eight days", "2024-01-18", None),
        task("tomorrow", "2024-01-11", None),
        task("yesterday", "2024-01-09", None),
        task("today", "2024-01-10", None),
        task("broken", "n/a", None),
        completed,
    ];

    let deadlines = upcoming_deadlines(&tasks, today);

    let summary: Vec<(String, String, Urgency)> = deadlines
        .iter()
        .map(|deadline| (deadline.task.title.clone(), deadline.label(), deadline.urgency))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("today".to_string(), "Today!".to_string(), Urgency::High),
            ("tomorrow".to_string(), "Tomorrow!".to_string(), Urgency::High),
            ("week".to_string(), "7 days".to_string(), Urgency::Low),
        ]
    );
}

#[test]
fn bucket_labels_match_tab_names() {
    let labels: Vec<&str> = [
        TaskBucket::All,
        TaskBucket::Today,
        TaskBucket::Upcoming,
        TaskBucket::Completed,
    ]
    .into_iter()
    .map(TaskBucket::label)
    .collect();
    assert_eq!(labels, vec!["All", "Today", "Upcoming", "Completed"]);
}
