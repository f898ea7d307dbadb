//! Record store: the single owner of task and goal collections.
//!
//! # Responsibility
//! - Validate and apply create/complete/progress/delete mutations.
//! - Persist after every mutation through a `RecordGateway`.
//! - Hand out read-only views and owned snapshots to readers.
//!
//! # Invariants
//! - A mutation is kept only when the gateway acknowledges the save; on a
//!   save failure the in-memory state is restored to its prior value.
//! - Validation and not-found failures leave state untouched and skip the
//!   save entirely.
//! - Records are addressed by id only.

use crate::calendar::local_today;
use crate::model::goal::{Goal, GoalId, NewGoal};
use crate::model::task::{NewTask, Task, TaskId};
use crate::model::validation::RecordValidationError;
use crate::repo::gateway::{GatewayError, RecordGateway, RecordSet};
use crate::repo::json_file::write_backup;
use chrono::{Local, NaiveDate};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store operation failure.
#[derive(Debug)]
pub enum StoreError {
    /// Candidate or argument rejected; nothing changed.
    Validation(RecordValidationError),
    /// No task with this id; nothing changed.
    TaskNotFound(TaskId),
    /// No goal with this id; nothing changed.
    GoalNotFound(GoalId),
    /// Persistence failed; the mutation was rolled back.
    Gateway(GatewayError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::GoalNotFound(id) => write!(f, "goal not found: {id}"),
            Self::Gateway(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Gateway(err) => Some(err),
            Self::TaskNotFound(_) | Self::GoalNotFound(_) => None,
        }
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<GatewayError> for StoreError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

/// In-process owner of tasks and goals, backed by a gateway.
pub struct RecordStore<G: RecordGateway> {
    gateway: G,
    records: RecordSet,
    load_warning: Option<String>,
}

impl<G: RecordGateway> RecordStore<G> {
    /// Loads records through `gateway`.
    ///
    /// A load failure is not fatal: the store starts empty and keeps the
    /// failure message in [`RecordStore::load_warning`].
    pub fn open(gateway: G) -> Self {
        let (records, load_warning) = match gateway.load() {
            Ok(records) => (records, None),
            Err(err) => {
                warn!(
                    "event=store_open module=store status=degraded error_code=load_failed error={}",
                    err
                );
                (RecordSet::default(), Some(err.to_string()))
            }
        };
        info!(
            "event=store_open module=store status=ok tasks={} goals={}",
            records.tasks.len(),
            records.goals.len()
        );
        Self {
            gateway,
            records,
            load_warning,
        }
    }

    /// Message of the load failure that forced an empty start, if any.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Read-only view of all tasks in insertion order.
    pub fn list_tasks(&self) -> &[Task] {
        &self.records.tasks
    }

    /// Read-only view of all goals in insertion order.
    pub fn list_goals(&self) -> &[Goal] {
        &self.records.goals
    }

    /// Owned copy of both collections.
    pub fn snapshot(&self) -> RecordSet {
        self.records.clone()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.records.tasks.iter().find(|task| task.id == id)
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.records.goals.iter().find(|goal| goal.id == id)
    }

    /// Validates, appends and persists a new open task.
    pub fn add_task(&mut self, candidate: NewTask) -> StoreResult<Task> {
        let task = candidate.into_task()?;
        let created = task.clone();
        self.commit("task_add", move |records| {
            records.tasks.push(task);
            Ok(())
        })?;
        info!("event=task_add module=store status=ok task_id={}", created.id);
        Ok(created)
    }

    /// Validates, appends and persists a new goal at 0% progress.
    pub fn add_goal(&mut self, candidate: NewGoal) -> StoreResult<Goal> {
        let goal = candidate.into_goal()?;
        let created = goal.clone();
        self.commit("goal_add", move |records| {
            records.goals.push(goal);
            Ok(())
        })?;
        info!(
            "event=goal_add module=store status=ok goal_id={} milestones={}",
            created.id,
            created.milestones.len()
        );
        Ok(created)
    }

    /// Completes a task, stamping today's local date.
    pub fn complete_task(&mut self, id: TaskId) -> StoreResult<Task> {
        self.complete_task_on(id, local_today())
    }

    /// Completes a task, stamping `on` as its completion date.
    ///
    /// Completing an already completed task returns it unchanged and does
    /// not persist.
    pub fn complete_task_on(&mut self, id: TaskId, on: NaiveDate) -> StoreResult<Task> {
        let index = self.task_index(id)?;
        if self.records.tasks[index].completed {
            return Ok(self.records.tasks[index].clone());
        }
        self.commit("task_complete", |records| {
            records.tasks[index].mark_completed(on);
            Ok(())
        })?;
        info!("event=task_complete module=store status=ok task_id={id}");
        Ok(self.records.tasks[index].clone())
    }

    /// Removes a task by id.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self.task_index(id)?;
        self.commit("task_delete", |records| {
            records.tasks.remove(index);
            Ok(())
        })?;
        info!("event=task_delete module=store status=ok task_id={id}");
        Ok(())
    }

    /// Removes a goal by id.
    pub fn delete_goal(&mut self, id: GoalId) -> StoreResult<()> {
        let index = self.goal_index(id)?;
        self.commit("goal_delete", |records| {
            records.goals.remove(index);
            Ok(())
        })?;
        info!("event=goal_delete module=store status=ok goal_id={id}");
        Ok(())
    }

    /// Sets goal progress; `completed` becomes `progress == 100`.
    ///
    /// # Errors
    /// - `GoalNotFound` for an unknown id.
    /// - `Validation(ProgressOutOfRange)` outside `0..=100`.
    pub fn update_goal_progress(&mut self, id: GoalId, progress: i64) -> StoreResult<Goal> {
        let index = self.goal_index(id)?;
        self.commit("goal_progress", |records| {
            records.goals[index].set_progress(progress)?;
            Ok(())
        })?;
        info!(
            "event=goal_progress module=store status=ok goal_id={id} progress={}",
            self.records.goals[index].progress
        );
        Ok(self.records.goals[index].clone())
    }

    /// Marks a goal achieved without changing its progress.
    pub fn complete_goal(&mut self, id: GoalId) -> StoreResult<Goal> {
        let index = self.goal_index(id)?;
        self.commit("goal_complete", |records| {
            records.goals[index].mark_achieved();
            Ok(())
        })?;
        info!(
            "event=goal_complete module=store status=ok goal_id={id} progress={}",
            self.records.goals[index].progress
        );
        Ok(self.records.goals[index].clone())
    }

    /// Removes every task and goal.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        self.commit("records_clear", |records| {
            records.tasks.clear();
            records.goals.clear();
            Ok(())
        })?;
        info!("event=records_clear module=store status=ok");
        Ok(())
    }

    /// Writes the current collections to a timestamped file in `dir`.
    pub fn backup_to(&self, dir: &Path) -> StoreResult<PathBuf> {
        let now = Local::now().naive_local();
        write_backup(dir, &self.records.tasks, &self.records.goals, now).map_err(Into::into)
    }

    fn task_index(&self, id: TaskId) -> StoreResult<usize> {
        self.records
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }

    fn goal_index(&self, id: GoalId) -> StoreResult<usize> {
        self.records
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(StoreError::GoalNotFound(id))
    }

    /// Applies `mutate`, then persists; restores prior state on any failure.
    fn commit(
        &mut self,
        event: &'static str,
        mutate: impl FnOnce(&mut RecordSet) -> StoreResult<()>,
    ) -> StoreResult<()> {
        let previous = self.records.clone();
        if let Err(err) = mutate(&mut self.records) {
            self.records = previous;
            return Err(err);
        }

        if let Err(err) = self
            .gateway
            .save(&self.records.tasks, &self.records.goals)
        {
            self.records = previous;
            error!(
                "event={event} module=store status=error error_code=save_failed rolled_back=true error={err}"
            );
            return Err(err.into());
        }
        Ok(())
    }
}
