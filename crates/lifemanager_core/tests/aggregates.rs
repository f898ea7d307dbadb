use chrono::NaiveDate;
use lifemanager_core::{
    category_breakdown, completion_rate, goal_progress_overview, is_this_week, weekly_completion,
    CategoryCount, DashboardSummary, Goal, GoalCategory, NewGoal, NewTask, Task,
};

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn task(date: &str) -> Task {
    let mut task = NewTask::new("fixture", "2024-01-01").into_task().unwrap();
    task.date = date.to_string();
    task
}

fn completed_task(date: &str, completed_on: &str) -> Task {
    let mut task = task(date);
    task.completed = true;
    task.completion_date = Some(completed_on.to_string());
    task
}

fn goal(category: Option<GoalCategory>) -> Goal {
    let mut goal = NewGoal::new("fixture", "2024-12-31").into_goal().unwrap();
    goal.category = category;
    goal
}

#[test]
fn completion_rate_handles_empty_and_rounds() {
    assert_eq!(completion_rate(&[]), 0);

    let mut tasks = vec![
        completed_task("2024-01-01", "2024-01-01"),
        completed_task("2024-01-02", "2024-01-02"),
        completed_task("2024-01-03", "2024-01-03"),
        task("2024-01-04"),
    ];
    assert_eq!(completion_rate(&tasks), 75);

    tasks.truncate(3);
    tasks.push(task("2024-01-05"));
    tasks.push(task("2024-01-06"));
    tasks.push(task("2024-01-07"));
    // 3 of 6.
    assert_eq!(completion_rate(&tasks), 50);

    let two_of_three = vec![
        completed_task("2024-01-01", "2024-01-01"),
        completed_task("2024-01-01", "2024-01-01"),
        task("2024-01-01"),
    ];
    assert_eq!(completion_rate(&two_of_three), 67);
}

#[test]
fn completion_rate_rounds_halves_to_even() {
    let with_completed = |done: usize| -> Vec<Task> {
        (0..8)
            .map(|index| {
                if index < done {
                    completed_task("2024-01-01", "2024-01-01")
                } else {
                    task("2024-01-01")
                }
            })
            .collect()
    };

    // 12.5 and 37.5.
    assert_eq!(completion_rate(&with_completed(1)), 12);
    assert_eq!(completion_rate(&with_completed(3)), 38);
    assert_eq!(completion_rate(&with_completed(8)), 100);
}

#[test]
fn category_breakdown_keeps_first_seen_order_and_buckets_missing() {
    let goals = vec![
        goal(Some(GoalCategory::Health)),
        goal(None),
        goal(Some(GoalCategory::Financial)),
        goal(Some(GoalCategory::Health)),
        goal(Some(GoalCategory::Custom("  ".to_string()))),
        goal(Some(GoalCategory::Custom("Travel".to_string()))),
    ];

    let breakdown = category_breakdown(&goals);

    assert_eq!(
        breakdown,
        vec![
            CategoryCount {
                category: "Health".to_string(),
                count: 2
            },
            CategoryCount {
                category: "Uncategorized".to_string(),
                count: 2
            },
            CategoryCount {
                category: "Financial".to_string(),
                count: 1
            },
            CategoryCount {
                category: "Travel".to_string(),
                count: 1
            },
        ]
    );
}

#[test]
fn weekly_completion_counts_seven_days_ending_at_reference() {
    let reference = date("2024-01-10");
    let tasks = vec![
        completed_task("2024-01-01", "2024-01-10"),
        completed_task("2024-01-01", "2024-01-10"),
        completed_task("2024-01-01", "2024-01-04"),
        completed_task("2024-01-01", "2024-01-03"),
        completed_task("2024-01-01", "garbage"),
        task("2024-01-10"),
    ];

    let series = weekly_completion(&tasks, reference);

    assert_eq!(series.len(), 7);
    assert_eq!(series[0].date, date("2024-01-04"));
    assert_eq!(series[6].date, reference);
    let counts: Vec<usize> = series.iter().map(|day| day.count).collect();
    assert_eq!(counts, vec![1, 0, 0, 0, 0, 0, 2]);
    assert_eq!(series[0].weekday_label(), "Thu");
}

#[test]
fn is_this_week_uses_monday_to_sunday() {
    // Wednesday.
    let reference = date("2024-01-10");

    assert!(is_this_week(&task("2024-01-08"), reference));
    assert!(is_this_week(&task("2024-01-14"), reference));
    assert!(!is_this_week(&task("2024-01-07"), reference));
    assert!(!is_this_week(&task("2024-01-15"), reference));
    assert!(!is_this_week(&task("not a date"), reference));

    let sunday = date("2024-01-14");
    assert!(is_this_week(&task("2024-01-08"), sunday));
}

#[test]
fn goal_overview_partitions_by_achievement() {
    let mut achieved = goal(None);
    achieved.completed = true;
    let goals = vec![goal(None), achieved.clone(), goal(None)];

    let overview = goal_progress_overview(&goals);

    assert_eq!(overview.in_progress.len(), 2);
    assert_eq!(overview.achieved, vec![&achieved]);
}

#[test]
fn dashboard_summary_counts_every_card() {
    let today = date("2024-01-10");
    let tasks = vec![
        task("2024-01-10"),
        task("2024-01-09"),
        completed_task("2024-01-08", "2024-01-09"),
        task("2024-01-20"),
    ];
    let mut achieved = goal(None);
    achieved.completed = true;
    let goals = vec![goal(None), achieved];

    let summary = DashboardSummary::compute(&tasks, &goals, today);

    assert_eq!(
        summary,
        DashboardSummary {
            total_tasks: 4,
            due_today: 1,
            overdue: 1,
            completed_tasks: 1,
            completion_rate: 25,
            tasks_this_week: 3,
            total_goals: 2,
            goals_in_progress: 1,
            achieved_goals: 1,
        }
    );
}
