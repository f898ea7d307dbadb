//! Command-line driver for the life manager core.
//!
//! # Responsibility
//! - Map subcommands onto record store mutations and query/aggregate calls.
//! - Render results as plain text; no business rules live here.

mod render;

use clap::{Parser, Subcommand, ValueEnum};
use lifemanager_core::{
    calendar, init_logging, CoreConfig, DashboardSummary, GoalCategory, JsonFileGateway, LogLevel,
    NewGoal, NewTask, Priority, RecordStore, TaskBucket, TaskQuery, TaskSortKey,
};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "lifemanager", version, about = "Track tasks and goals from the terminal")]
struct Cli {
    /// Data file holding tasks and goals
    #[arg(long, env = "LIFEMANAGER_DATA_PATH")]
    data: Option<PathBuf>,

    /// Absolute directory for rolling log files
    #[arg(long, env = "LIFEMANAGER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "LIFEMANAGER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Reference date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List tasks, optionally filtered, sorted and grouped by day
    Tasks {
        #[arg(long, value_enum, default_value_t = BucketArg::All)]
        bucket: BucketArg,
        /// Case-insensitive text matched against title and description
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum, default_value_t = SortArg::Datetime)]
        sort: SortArg,
        /// Print a header per day
        #[arg(long)]
        grouped: bool,
    },
    /// Add a task
    AddTask {
        title: String,
        /// Due date (YYYY-MM-DD)
        date: String,
        #[arg(long)]
        time: Option<String>,
        #[arg(long, default_value = "Medium")]
        priority: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Mark a task completed
    CompleteTask { id: Uuid },
    /// Delete a task
    DeleteTask { id: Uuid },
    /// List goals with progress
    Goals,
    /// Add a goal
    AddGoal {
        title: String,
        /// Target date (YYYY-MM-DD)
        target_date: String,
        /// Personal, Professional, Health, Financial, Educational, or any custom label
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
        /// Milestones, one per line
        #[arg(long, default_value = "")]
        milestones: String,
    },
    /// Set goal progress (0-100)
    Progress {
        id: Uuid,
        #[arg(allow_negative_numbers = true)]
        progress: i64,
    },
    /// Mark a goal achieved without changing its progress
    AchieveGoal { id: Uuid },
    /// Delete a goal
    DeleteGoal { id: Uuid },
    /// Open tasks due within the next 7 days
    Deadlines,
    /// Dashboard counters, category breakdown and 7-day completion trend
    Stats,
    /// Write a timestamped backup into a directory
    Backup { dir: PathBuf },
    /// Delete every task and goal
    Clear {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BucketArg {
    All,
    Today,
    Upcoming,
    Completed,
}

impl From<BucketArg> for TaskBucket {
    fn from(value: BucketArg) -> Self {
        match value {
            BucketArg::All => Self::All,
            BucketArg::Today => Self::Today,
            BucketArg::Upcoming => Self::Upcoming,
            BucketArg::Completed => Self::Completed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Time,
    Datetime,
    Priority,
    Title,
}

impl From<SortArg> for TaskSortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Time => Self::Time,
            SortArg::Datetime => Self::DateTime,
            SortArg::Priority => Self::Priority,
            SortArg::Title => Self::Title,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli)?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, log_dir).map_err(|err| err.to_string())?;
    }

    let today = match cli.today.as_deref() {
        Some(raw) => calendar::parse_date(raw)
            .ok_or_else(|| format!("invalid --today `{raw}`; expected YYYY-MM-DD"))?,
        None => calendar::local_today(),
    };

    let mut store = RecordStore::open(JsonFileGateway::new(&config.data_path));
    if let Some(warning) = store.load_warning() {
        eprintln!(
            "warning: starting with empty records from {}: {warning}",
            store.gateway().path().display()
        );
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        lifemanager_core::core_version()
    );

    match cli.command {
        Command::Tasks {
            bucket,
            search,
            sort,
            grouped,
        } => {
            let bucket = TaskBucket::from(bucket);
            let query = TaskQuery::new(bucket).with_text(search).sorted_by(sort.into());
            render::bucket_header(bucket);
            if grouped {
                render::day_groups(&query.run_grouped(store.list_tasks(), today));
            } else {
                render::task_lines(&query.run(store.list_tasks(), today));
            }
        }
        Command::AddTask {
            title,
            date,
            time,
            priority,
            description,
        } => {
            let priority = priority
                .parse::<Priority>()
                .map_err(|err| err.to_string())?;
            let mut candidate = NewTask::new(title, date)
                .with_priority(priority)
                .with_description(description);
            if let Some(time) = time {
                candidate = candidate.with_time(time);
            }
            let task = store.add_task(candidate).map_err(|err| err.to_string())?;
            println!("added task {}", task.id);
        }
        Command::CompleteTask { id } => {
            let task = store
                .complete_task_on(id, today)
                .map_err(|err| err.to_string())?;
            println!(
                "completed task {} on {}",
                task.id,
                task.completion_date.as_deref().unwrap_or("-")
            );
        }
        Command::DeleteTask { id } => {
            store.delete_task(id).map_err(|err| err.to_string())?;
            println!("deleted task {id}");
        }
        Command::Goals => render::goals(store.list_goals()),
        Command::AddGoal {
            title,
            target_date,
            category,
            description,
            milestones,
        } => {
            let mut candidate = NewGoal::new(title, target_date)
                .with_description(description)
                .with_milestones(milestones.replace("\\n", "\n"));
            if let Some(category) = category.filter(|value| !value.trim().is_empty()) {
                candidate = candidate.with_category(GoalCategory::parse_label(&category));
            }
            let goal = store.add_goal(candidate).map_err(|err| err.to_string())?;
            println!("added goal {}", goal.id);
        }
        Command::Progress { id, progress } => {
            let goal = store
                .update_goal_progress(id, progress)
                .map_err(|err| err.to_string())?;
            println!(
                "goal {} at {}%{}",
                goal.id,
                goal.progress,
                if goal.completed { " (achieved)" } else { "" }
            );
        }
        Command::AchieveGoal { id } => {
            let goal = store.complete_goal(id).map_err(|err| err.to_string())?;
            println!("goal {} achieved at {}%", goal.id, goal.progress);
        }
        Command::DeleteGoal { id } => {
            store.delete_goal(id).map_err(|err| err.to_string())?;
            println!("deleted goal {id}");
        }
        Command::Deadlines => {
            render::deadlines(&lifemanager_core::upcoming_deadlines(
                store.list_tasks(),
                today,
            ));
        }
        Command::Stats => {
            let summary = DashboardSummary::compute(store.list_tasks(), store.list_goals(), today);
            render::stats(&summary, store.list_tasks(), store.list_goals(), today);
        }
        Command::Backup { dir } => {
            let path = store.backup_to(&dir).map_err(|err| err.to_string())?;
            println!("backup written to {}", path.display());
        }
        Command::Clear { yes } => {
            if !yes {
                return Err("refusing to clear all data without --yes".to_string());
            }
            store.clear_all().map_err(|err| err.to_string())?;
            println!("all tasks and goals cleared");
        }
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<CoreConfig, String> {
    let mut config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.parse::<LogLevel>().map_err(|err| err.to_string())?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn progress_accepts_negative_values_for_validation() {
        let cli = Cli::try_parse_from([
            "lifemanager",
            "progress",
            "6f1c1a52-1d8e-4a55-9a0e-2f6f1a9b2c11",
            "-5",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Progress { progress: -5, .. }));
    }
}
