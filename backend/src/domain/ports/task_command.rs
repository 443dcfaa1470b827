//! Driving port for task lifecycle mutations.
//!
//! Every mutation returns the task as stored afterwards together with the
//! owner's achievement totals, so clients can refresh both from one call.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AchievementRecord, Error, Task, TaskId, UserId};

/// Serializable task payload for driving ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub id: TaskId,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskPayload {
    fn from(value: &Task) -> Self {
        Self {
            id: value.id(),
            owner_id: value.owner().clone(),
            title: value.title().to_owned(),
            description: value.description().map(str::to_owned),
            due_date: value.due_date(),
            completed: value.completed(),
            completed_at: value.completed_at(),
            created_at: value.created_at(),
        }
    }
}

impl From<Task> for TaskPayload {
    fn from(value: Task) -> Self {
        Self::from(&value)
    }
}

/// Serializable achievement totals for driving ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPayload {
    pub user_id: UserId,
    pub points: u64,
    pub tasks_completed: u64,
    pub current_streak: u32,
    pub last_completion_date: Option<NaiveDate>,
}

impl From<&AchievementRecord> for AchievementPayload {
    fn from(value: &AchievementRecord) -> Self {
        Self {
            user_id: value.owner().clone(),
            points: value.points(),
            tasks_completed: value.tasks_completed(),
            current_streak: value.current_streak(),
            last_completion_date: value.last_completion_date(),
        }
    }
}

/// Request to create a task for `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskResponse {
    pub task: TaskPayload,
}

/// Identifies a task acted on by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMutationRequest {
    pub user_id: UserId,
    pub task_id: TaskId,
}

/// Outcome of complete, uncomplete and toggle.
///
/// `changed` is `false` when the task was already in the requested state and
/// nothing was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMutationResponse {
    pub task: TaskPayload,
    pub achievements: AchievementPayload,
    pub points_awarded: u64,
    pub changed: bool,
}

/// Outcome of deleting a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskResponse {
    pub task_id: TaskId,
    pub achievements: AchievementPayload,
    /// Whether the deleted task had counted towards `tasksCompleted`.
    pub released_completion: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskCommand: Send + Sync {
    async fn create_task(&self, request: CreateTaskRequest) -> Result<CreateTaskResponse, Error>;

    async fn complete_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<TaskMutationResponse, Error>;

    async fn uncomplete_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<TaskMutationResponse, Error>;

    /// Complete a pending task or uncomplete a completed one.
    async fn toggle_task(&self, request: TaskMutationRequest)
    -> Result<TaskMutationResponse, Error>;

    async fn delete_task(&self, request: TaskMutationRequest)
    -> Result<DeleteTaskResponse, Error>;
}

/// Fixture command that echoes requests without persisting anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskCommand;

impl FixtureTaskCommand {
    fn fixture_task(request: &TaskMutationRequest, completed: bool) -> TaskPayload {
        let created_at = DateTime::<Utc>::UNIX_EPOCH;
        TaskPayload {
            id: request.task_id,
            owner_id: request.user_id.clone(),
            title: "Fixture task".to_owned(),
            description: None,
            due_date: None,
            completed,
            completed_at: completed.then_some(created_at),
            created_at,
        }
    }

    fn empty_totals(user_id: &UserId) -> AchievementPayload {
        AchievementPayload::from(&AchievementRecord::new(user_id.clone()))
    }
}

#[async_trait]
impl TaskCommand for FixtureTaskCommand {
    async fn create_task(&self, request: CreateTaskRequest) -> Result<CreateTaskResponse, Error> {
        Ok(CreateTaskResponse {
            task: TaskPayload {
                id: TaskId::random(),
                owner_id: request.user_id,
                title: request.title,
                description: request.description,
                due_date: request.due_date,
                completed: false,
                completed_at: None,
                created_at: DateTime::<Utc>::UNIX_EPOCH,
            },
        })
    }

    async fn complete_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<TaskMutationResponse, Error> {
        Ok(TaskMutationResponse {
            task: Self::fixture_task(&request, true),
            achievements: Self::empty_totals(&request.user_id),
            points_awarded: 0,
            changed: false,
        })
    }

    async fn uncomplete_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<TaskMutationResponse, Error> {
        Ok(TaskMutationResponse {
            task: Self::fixture_task(&request, false),
            achievements: Self::empty_totals(&request.user_id),
            points_awarded: 0,
            changed: false,
        })
    }

    async fn toggle_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<TaskMutationResponse, Error> {
        self.complete_task(request).await
    }

    async fn delete_task(
        &self,
        request: TaskMutationRequest,
    ) -> Result<DeleteTaskResponse, Error> {
        Ok(DeleteTaskResponse {
            task_id: request.task_id,
            achievements: Self::empty_totals(&request.user_id),
            released_completion: false,
        })
    }
}
