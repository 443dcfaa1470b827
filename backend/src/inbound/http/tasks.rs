//! Task lifecycle HTTP handlers.
//!
//! ```text
//! GET    /api/v1/users/{user_id}/tasks
//! POST   /api/v1/users/{user_id}/tasks
//! POST   /api/v1/users/{user_id}/tasks/{task_id}/complete
//! POST   /api/v1/users/{user_id}/tasks/{task_id}/uncomplete
//! POST   /api/v1/users/{user_id}/tasks/{task_id}/toggle
//! DELETE /api/v1/users/{user_id}/tasks/{task_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    AchievementPayload, CreateTaskRequest, ListTasksRequest, TaskMutationRequest,
    TaskMutationResponse, TaskPayload,
};
use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    DUE_DATE, TASK_ID, USER_ID, parse_optional_date, parse_task_id, parse_user_id,
};

/// Request payload for creating a task.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequestBody {
    #[schema(example = "Write weekly report")]
    pub title: String,
    pub description: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    #[schema(example = "2026-03-06")]
    pub due_date: Option<String>,
}

/// Task as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub created_at: String,
}

impl From<TaskPayload> for TaskResponse {
    fn from(value: TaskPayload) -> Self {
        Self {
            id: value.id.to_string(),
            owner_id: value.owner_id.to_string(),
            title: value.title,
            description: value.description,
            due_date: value.due_date.map(|date| date.to_string()),
            completed: value.completed,
            completed_at: value.completed_at.map(|at| at.to_rfc3339()),
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Achievement totals returned alongside task mutations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementResponse {
    pub user_id: String,
    pub points: u64,
    pub tasks_completed: u64,
    pub current_streak: u32,
    pub last_completion_date: Option<String>,
}

impl From<AchievementPayload> for AchievementResponse {
    fn from(value: AchievementPayload) -> Self {
        Self {
            user_id: value.user_id.to_string(),
            points: value.points,
            tasks_completed: value.tasks_completed,
            current_streak: value.current_streak,
            last_completion_date: value.last_completion_date.map(|date| date.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksResponseBody {
    pub tasks: Vec<TaskResponse>,
}

/// Result of complete, uncomplete and toggle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskMutationResponseBody {
    pub task: TaskResponse,
    pub achievements: AchievementResponse,
    pub points_awarded: u64,
    /// `false` when the task was already in the requested state.
    pub changed: bool,
}

impl From<TaskMutationResponse> for TaskMutationResponseBody {
    fn from(value: TaskMutationResponse) -> Self {
        Self {
            task: TaskResponse::from(value.task),
            achievements: AchievementResponse::from(value.achievements),
            points_awarded: value.points_awarded,
            changed: value.changed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskResponseBody {
    pub task_id: String,
    pub achievements: AchievementResponse,
    pub released_completion: bool,
}

#[derive(Debug, Deserialize)]
pub struct UserPath {
    user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskPath {
    user_id: String,
    task_id: String,
}

fn parse_task_path(path: TaskPath) -> Result<TaskMutationRequest, Error> {
    Ok(TaskMutationRequest {
        user_id: parse_user_id(&path.user_id, USER_ID)?,
        task_id: parse_task_id(&path.task_id, TASK_ID)?,
    })
}

fn parse_create_request(
    user_id: UserId,
    body: CreateTaskRequestBody,
) -> Result<CreateTaskRequest, Error> {
    Ok(CreateTaskRequest {
        user_id,
        title: body.title,
        description: body.description,
        due_date: parse_optional_date(body.due_date, DUE_DATE)?,
    })
}

/// List a user's tasks, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/tasks",
    params(("user_id" = String, Path, description = "Task owner")),
    responses(
        (status = 200, description = "Tasks", body = ListTasksResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/users/{user_id}/tasks")]
pub async fn list_tasks(
    state: web::Data<HttpState>,
    path: web::Path<UserPath>,
) -> ApiResult<web::Json<ListTasksResponseBody>> {
    let user_id = parse_user_id(&path.into_inner().user_id, USER_ID)?;
    let response = state
        .tasks_query
        .list_tasks(ListTasksRequest { user_id })
        .await?;

    Ok(web::Json(ListTasksResponseBody {
        tasks: response.tasks.into_iter().map(TaskResponse::from).collect(),
    }))
}

/// Create a pending task.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/tasks",
    params(("user_id" = String, Path, description = "Task owner")),
    request_body = CreateTaskRequestBody,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/users/{user_id}/tasks")]
pub async fn create_task(
    state: web::Data<HttpState>,
    path: web::Path<UserPath>,
    payload: web::Json<CreateTaskRequestBody>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path.into_inner().user_id, USER_ID)?;
    let request = parse_create_request(user_id, payload.into_inner())?;
    let response = state.tasks.create_task(request).await?;

    Ok(HttpResponse::Created().json(TaskResponse::from(response.task)))
}

/// Mark a task completed and award points.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/tasks/{task_id}/complete",
    params(
        ("user_id" = String, Path, description = "Task owner"),
        ("task_id" = String, Path, description = "Task identifier")
    ),
    responses(
        (status = 200, description = "Task completed or already completed", body = TaskMutationResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 403, description = "Task belongs to another user", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "completeTask"
)]
#[post("/users/{user_id}/tasks/{task_id}/complete")]
pub async fn complete_task(
    state: web::Data<HttpState>,
    path: web::Path<TaskPath>,
) -> ApiResult<web::Json<TaskMutationResponseBody>> {
    let request = parse_task_path(path.into_inner())?;
    let response = state.tasks.complete_task(request).await?;
    Ok(web::Json(response.into()))
}

/// Mark a task pending again. Points already earned are kept.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/tasks/{task_id}/uncomplete",
    params(
        ("user_id" = String, Path, description = "Task owner"),
        ("task_id" = String, Path, description = "Task identifier")
    ),
    responses(
        (status = 200, description = "Task reopened or already pending", body = TaskMutationResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 403, description = "Task belongs to another user", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "uncompleteTask"
)]
#[post("/users/{user_id}/tasks/{task_id}/uncomplete")]
pub async fn uncomplete_task(
    state: web::Data<HttpState>,
    path: web::Path<TaskPath>,
) -> ApiResult<web::Json<TaskMutationResponseBody>> {
    let request = parse_task_path(path.into_inner())?;
    let response = state.tasks.uncomplete_task(request).await?;
    Ok(web::Json(response.into()))
}

/// Flip a task between pending and completed.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/tasks/{task_id}/toggle",
    params(
        ("user_id" = String, Path, description = "Task owner"),
        ("task_id" = String, Path, description = "Task identifier")
    ),
    responses(
        (status = 200, description = "Task toggled", body = TaskMutationResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 403, description = "Task belongs to another user", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "toggleTask"
)]
#[post("/users/{user_id}/tasks/{task_id}/toggle")]
pub async fn toggle_task(
    state: web::Data<HttpState>,
    path: web::Path<TaskPath>,
) -> ApiResult<web::Json<TaskMutationResponseBody>> {
    let request = parse_task_path(path.into_inner())?;
    let response = state.tasks.toggle_task(request).await?;
    Ok(web::Json(response.into()))
}

/// Delete a task. A completed task no longer counts towards `tasksCompleted`.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/tasks/{task_id}",
    params(
        ("user_id" = String, Path, description = "Task owner"),
        ("task_id" = String, Path, description = "Task identifier")
    ),
    responses(
        (status = 200, description = "Task deleted", body = DeleteTaskResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 403, description = "Task belongs to another user", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "deleteTask"
)]
#[delete("/users/{user_id}/tasks/{task_id}")]
pub async fn delete_task(
    state: web::Data<HttpState>,
    path: web::Path<TaskPath>,
) -> ApiResult<web::Json<DeleteTaskResponseBody>> {
    let request = parse_task_path(path.into_inner())?;
    let response = state.tasks.delete_task(request).await?;

    Ok(web::Json(DeleteTaskResponseBody {
        task_id: response.task_id.to_string(),
        achievements: AchievementResponse::from(response.achievements),
        released_completion: response.released_completion,
    }))
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
