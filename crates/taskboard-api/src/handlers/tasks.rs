//! Task CRUD API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use taskboard_domain::{Priority, Task, TaskId, TaskRepository, TaskStatus};

use crate::{
    auth::AuthSession,
    error::{ApiError, ApiResult},
    models::{CreateTaskRequest, TaskListResponse, TaskResponse, UpdateTaskRequest},
    state::AppState,
};

const MAX_TITLE_LENGTH: usize = 200;

fn parse_task_id(id: &str) -> ApiResult<TaskId> {
    TaskId::from_string(id).map_err(|_| ApiError::BadRequest(format!("Invalid task id '{}'", id)))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = []))
)]
pub async fn create_task(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    if request.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Task title cannot be empty".to_string()));
    }
    if request.title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Task title too long (max {} characters)",
            MAX_TITLE_LENGTH
        )));
    }

    let priority = Priority::new(request.priority)?;
    let status = request.status.unwrap_or(TaskStatus::Pending);
    let task = Task::new(
        request.title,
        request.start_time,
        request.end_time,
        priority,
        status,
    )?;

    state.tasks.save(&task).await?;
    tracing::debug!(task_id = %task.id(), user = %session.username, "task created");

    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    responses(
        (status = 200, description = "List of tasks", body = TaskListResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = []))
)]
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<TaskListResponse>> {
    let mut tasks = state.tasks.find_all().await?;
    tasks.sort_by_key(|t| t.created_at());

    let total = tasks.len();
    let tasks = tasks.iter().map(TaskResponse::from).collect();

    Ok(Json(TaskListResponse { tasks, total }))
}

/// Get task by ID
#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task details", body = TaskResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = []))
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = parse_task_id(&id)?;
    let task = state
        .tasks
        .find_by_id(&task_id)
        .await?
        .ok_or(ApiError::TaskNotFound(id))?;

    Ok(Json(TaskResponse::from(&task)))
}

/// Update task by ID; absent fields keep their current value
#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}",
    params(("id" = String, Path, description = "Task ID")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = TaskResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = []))
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = parse_task_id(&id)?;
    let mut task = state
        .tasks
        .find_by_id(&task_id)
        .await?
        .ok_or(ApiError::TaskNotFound(id))?;

    if let Some(title) = request.title {
        task.rename(title)?;
    }
    if request.start_time.is_some() || request.end_time.is_some() {
        let start = request.start_time.unwrap_or_else(|| task.start_time());
        let end = request.end_time.unwrap_or_else(|| task.end_time());
        task.reschedule(start, end);
    }
    if let Some(priority) = request.priority {
        task.set_priority(Priority::new(priority)?);
    }
    if let Some(status) = request.status {
        task.set_status(status);
    }

    state.tasks.save(&task).await?;

    Ok(Json(TaskResponse::from(&task)))
}

/// Delete task by ID
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = []))
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let task_id = parse_task_id(&id)?;
    if !state.tasks.exists(&task_id).await? {
        return Err(ApiError::TaskNotFound(id));
    }

    state.tasks.delete(&task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
