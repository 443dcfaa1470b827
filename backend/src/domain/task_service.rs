//! Task lifecycle services implementing the task command and query ports.
//!
//! Mutations that touch an achievement record run under the owner's lock for
//! the whole load, score and save cycle. The task is written before the
//! record; when the record write fails the task is restored to its previous
//! state so the stored pair stays consistent.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{
    AchievementPayload, AchievementRepository, CreateTaskRequest, CreateTaskResponse,
    DeleteTaskResponse, ListTasksRequest, ListTasksResponse, TaskCommand, TaskMutationRequest,
    TaskMutationResponse, TaskPayload, TaskQuery, TaskRepository,
};
use crate::domain::service_support::{map_achievement_repository_error, map_task_repository_error};
use crate::domain::{
    AchievementRecord, Error, ScoringEngine, ScoringError, Task, TaskDraft, TaskId, UserId,
    UserLocks,
};

/// Requested direction of a completion change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Complete,
    Uncomplete,
    Toggle,
}

/// Task service implementing the command driving port.
#[derive(Clone)]
pub struct TaskCommandService<T, A> {
    task_repo: Arc<T>,
    achievement_repo: Arc<A>,
    clock: Arc<dyn Clock>,
    engine: ScoringEngine,
    locks: Arc<UserLocks>,
}

impl<T, A> TaskCommandService<T, A> {
    /// Create a command service scoring with `engine`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use streakboard::domain::ScoringEngine;
    /// # use streakboard::domain::ports::{FixtureAchievementRepository, FixtureTaskRepository};
    /// let service = streakboard::domain::TaskCommandService::new(
    ///     Arc::new(FixtureTaskRepository),
    ///     Arc::new(FixtureAchievementRepository),
    ///     Arc::new(DefaultClock),
    ///     ScoringEngine::default(),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(
        task_repo: Arc<T>,
        achievement_repo: Arc<A>,
        clock: Arc<dyn Clock>,
        engine: ScoringEngine,
    ) -> Self {
        Self {
            task_repo,
            achievement_repo,
            clock,
            engine,
            locks: Arc::new(UserLocks::new()),
        }
    }
}

impl<T, A> TaskCommandService<T, A>
where
    T: TaskRepository,
    A: AchievementRepository,
{
    async fn load_owned_task(&self, user_id: &UserId, task_id: &TaskId) -> Result<Task, Error> {
        let task = self
            .task_repo
            .find_by_id(task_id)
            .await
            .map_err(map_task_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("task {task_id} not found"))
                    .with_details(json!({ "taskId": task_id }))
            })?;
        if task.owner() != user_id {
            return Err(Error::forbidden("task belongs to another user")
                .with_details(json!({ "taskId": task_id })));
        }
        Ok(task)
    }

    async fn load_record(&self, user_id: &UserId) -> Result<AchievementRecord, Error> {
        let record = self
            .achievement_repo
            .find_for_user(user_id)
            .await
            .map_err(map_achievement_repository_error)?;
        Ok(record.unwrap_or_else(|| AchievementRecord::new(user_id.clone())))
    }

    /// Write `task` then `record`. If the record write fails, `previous` is
    /// written back in place of `task`.
    async fn persist(
        &self,
        task: &Task,
        record: &AchievementRecord,
        previous: &Task,
    ) -> Result<(), Error> {
        self.task_repo
            .save(task)
            .await
            .map_err(map_task_repository_error)?;
        if let Err(err) = self.achievement_repo.save(record).await {
            self.restore_task(previous, &err.to_string()).await;
            return Err(map_achievement_repository_error(err));
        }
        Ok(())
    }

    /// Undo a task write after the matching record write failed.
    async fn restore_task(&self, previous: &Task, cause: &str) {
        let task_id = previous.id();
        match self.task_repo.save(previous).await {
            Ok(()) => error!(
                task_id = %task_id,
                cause,
                "achievement record save failed; task change rolled back"
            ),
            Err(rollback) => error!(
                task_id = %task_id,
                cause,
                rollback_error = %rollback,
                "achievement record save failed and task rollback failed"
            ),
        }
    }

    async fn apply_transition(
        &self,
        request: TaskMutationRequest,
        transition: Transition,
    ) -> Result<TaskMutationResponse, Error> {
        let TaskMutationRequest { user_id, task_id } = request;
        let _guard = self.locks.lock(&user_id).await;

        let mut task = self.load_owned_task(&user_id, &task_id).await?;
        let mut record = self.load_record(&user_id).await?;
        let previous = task.clone();
        let complete = match transition {
            Transition::Complete => true,
            Transition::Uncomplete => false,
            Transition::Toggle => !task.completed(),
        };

        let outcome = if complete {
            self.engine
                .complete_task(&mut task, &mut record, self.clock.utc())
                .map(|outcome| outcome.points_awarded)
        } else {
            self.engine
                .uncomplete_task(&mut task, &mut record)
                .map(|()| 0)
        };

        let (points_awarded, changed) = match outcome {
            Ok(points_awarded) => {
                self.persist(&task, &record, &previous).await?;
                info!(
                    user_id = %user_id,
                    task_id = %task_id,
                    completed = task.completed(),
                    points_awarded,
                    points = record.points(),
                    streak = record.current_streak(),
                    "task completion state changed"
                );
                (points_awarded, true)
            }
            Err(ScoringError::PreconditionViolation { expected, .. }) => {
                warn!(
                    user_id = %user_id,
                    task_id = %task_id,
                    expected = %expected,
                    "ignoring transition on task already in requested state"
                );
                (0, false)
            }
            Err(err @ ScoringError::OwnerMismatch { .. }) => {
                return Err(Error::internal(err.to_string()));
            }
        };

        Ok(TaskMutationResponse {
            task: TaskPayload::from(&task),
            achievements: AchievementPayload::from(&record),
            points_awarded,
            changed,
        })
    }
}

#[async_trait]
impl<T, A> TaskCommand for TaskCommandService<T, A>
where
    T: TaskRepository,
    A: AchievementRepository,
{
    async fn create_task(&self, request: CreateTaskRequest) -> Result<CreateTaskResponse, Error> {
        let CreateTaskRequest {
            user_id,
            title,
            description,
            due_date,
        } = request;
        let task = Task::new(TaskDraft::pending(
            user_id,
            title,
            description,
            due_date,
            self.clock.utc(),
        ))
        .map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "title" }))
        })?;

        self.task_repo
            .save(&task)
            .await
            .map_err(map_task_repository_error)?;
        info!(user_id = %task.owner(), task_id = %task.id(), "task created");

        Ok(CreateTaskResponse {
            task: TaskPayload::from(task),
        })
    }

    async fn complete_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<TaskMutationResponse, Error> {
        self.apply_transition(request, Transition::Complete).await
    }

    async fn uncomplete_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<TaskMutationResponse, Error> {
        self.apply_transition(request, Transition::Uncomplete).await
    }

    async fn toggle_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<TaskMutationResponse, Error> {
        self.apply_transition(request, Transition::Toggle).await
    }

    async fn delete_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<DeleteTaskResponse, Error> {
        let TaskMutationRequest { user_id, task_id } = request;
        let _guard = self.locks.lock(&user_id).await;

        let task = self.load_owned_task(&user_id, &task_id).await?;
        let mut record = self.load_record(&user_id).await?;

        let deleted = self
            .task_repo
            .delete(&task_id)
            .await
            .map_err(map_task_repository_error)?;
        if !deleted {
            return Err(Error::not_found(format!("task {task_id} not found")));
        }

        let released_completion = self
            .engine
            .release_deleted_task(&task, &mut record)
            .map_err(|err| Error::internal(err.to_string()))?;
        if released_completion {
            if let Err(err) = self.achievement_repo.save(&record).await {
                self.restore_task(&task, &err.to_string()).await;
                return Err(map_achievement_repository_error(err));
            }
        }
        info!(
            user_id = %user_id,
            task_id = %task_id,
            released_completion,
            "task deleted"
        );

        Ok(DeleteTaskResponse {
            task_id,
            achievements: AchievementPayload::from(&record),
            released_completion,
        })
    }
}

/// Task service implementing the query driving port.
#[derive(Clone)]
pub struct TaskQueryService<T> {
    task_repo: Arc<T>,
}

impl<T> TaskQueryService<T> {
    pub fn new(task_repo: Arc<T>) -> Self {
        Self { task_repo }
    }
}

#[async_trait]
impl<T> TaskQuery for TaskQueryService<T>
where
    T: TaskRepository,
{
    async fn list_tasks(&self, request: ListTasksRequest) -> Result<ListTasksResponse, Error> {
        let mut tasks = self
            .task_repo
            .list_for_owner(&request.user_id)
            .await
            .map_err(map_task_repository_error)?;
        tasks.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });

        Ok(ListTasksResponse {
            tasks: tasks.iter().map(TaskPayload::from).collect(),
        })
    }
}

#[cfg(test)]
#[path = "task_service_tests.rs"]
mod tests;
