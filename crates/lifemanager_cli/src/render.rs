//! Plain-text rendering of core query and aggregate results.

use chrono::NaiveDate;
use lifemanager_core::calendar::display_time_12h;
use lifemanager_core::{
    category_breakdown, goal_progress_overview, weekly_completion, DashboardSummary, DayGroup,
    Deadline, Goal, Task, TaskBucket, Urgency,
};

pub fn bucket_header(bucket: TaskBucket) {
    println!("== {} ==", bucket.label());
}

pub fn task_lines(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("No tasks found");
        return;
    }
    for task in tasks {
        println!("{}", task_line(task));
    }
}

pub fn day_groups(groups: &[DayGroup<'_>]) {
    if groups.is_empty() {
        println!("No tasks found");
        return;
    }
    for group in groups {
        println!("{}", group.header);
        for task in &group.tasks {
            println!("  {}", task_line(task));
        }
    }
}

pub fn goals(goals: &[Goal]) {
    if goals.is_empty() {
        println!("No goals yet");
        return;
    }
    for goal in goals {
        let status = if goal.completed { "achieved" } else { "in progress" };
        let category = goal
            .category
            .as_ref()
            .map(|category| category.label().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} {:>3}% [{}] {} (target {}, {})",
            goal.id, goal.progress, status, goal.title, goal.target_date, category
        );
        for milestone in &goal.milestones {
            println!("    - {milestone}");
        }
    }
}

pub fn deadlines(deadlines: &[Deadline<'_>]) {
    if deadlines.is_empty() {
        println!("No upcoming deadlines in the next 7 days");
        return;
    }
    for deadline in deadlines {
        let urgency = match deadline.urgency {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        };
        println!(
            "{:<10} {:<6} {}",
            deadline.label(),
            urgency,
            deadline.task.title
        );
    }
}

pub fn stats(summary: &DashboardSummary, tasks: &[Task], goals: &[Goal], today: NaiveDate) {
    println!(
        "Tasks: {} total, {} due today, {} overdue, {} this week",
        summary.total_tasks, summary.due_today, summary.overdue, summary.tasks_this_week
    );
    println!(
        "Completed: {} ({}% completion rate)",
        summary.completed_tasks, summary.completion_rate
    );
    println!(
        "Goals: {} total, {} in progress, {} achieved",
        summary.total_goals, summary.goals_in_progress, summary.achieved_goals
    );

    let categories = category_breakdown(goals);
    if !categories.is_empty() {
        println!("Categories:");
        for entry in categories {
            println!("  {:<14} {}", entry.category, entry.count);
        }
    }

    let overview = goal_progress_overview(goals);
    if !overview.in_progress.is_empty() {
        println!("Goal progress:");
        for goal in overview.in_progress {
            println!("  {:>3}% {}", goal.progress, goal.title);
        }
    }

    println!("Completed last 7 days:");
    for day in weekly_completion(tasks, today) {
        println!("  {} {}", day.weekday_label(), "#".repeat(day.count));
    }
}

fn task_line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let time = task
        .time
        .as_deref()
        .map(display_time_12h)
        .unwrap_or_else(|| "--:--".to_string());
    format!(
        "[{mark}] {} {} {:<8} {:<6} {}",
        task.id,
        task.date,
        time,
        task.priority.as_str(),
        task.title
    )
}
