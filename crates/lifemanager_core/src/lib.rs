//! Core domain logic for Life Manager.
//! This crate is the single source of truth for task and goal invariants.

pub mod calendar;
pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod stats;

pub use config::{ConfigError, CoreConfig, LogLevel};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::goal::{parse_milestones, Goal, GoalCategory, GoalId, NewGoal};
pub use model::task::{NewTask, Priority, Task, TaskId};
pub use model::validation::RecordValidationError;
pub use query::deadline::{upcoming_deadlines, Deadline, Urgency};
pub use query::filter::{matches_text, TaskQuery};
pub use query::group::{group_by_day, DayGroup};
pub use query::sort::{sort_tasks, TaskSortKey};
pub use query::temporal::{is_due_today, is_overdue, is_upcoming, TaskBucket};
pub use repo::gateway::{GatewayError, GatewayResult, RecordGateway, RecordSet};
pub use repo::json_file::JsonFileGateway;
pub use repo::memory::MemoryGateway;
pub use service::record_store::{RecordStore, StoreError, StoreResult};
pub use stats::aggregate::{
    category_breakdown, completion_rate, goal_progress_overview, is_this_week, weekly_completion,
    CategoryCount, DailyCompletion, GoalProgressOverview,
};
pub use stats::summary::DashboardSummary;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
