//! Task handlers
//!
//! Endpoints for creating, reading, listing, updating and deleting tasks.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{FilterParameters, NewTask, Task, TaskId, TaskStatus};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or replacing a task
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub name: String,
    pub description: Option<String>,
    /// "opened" or "closed"
    pub status: String,
}

impl TryFrom<TaskRequest> for NewTask {
    type Error = AppError;

    fn try_from(request: TaskRequest) -> Result<Self, Self::Error> {
        if request.name.trim().is_empty() {
            return Err(AppError::Decode("name must not be empty".to_string()));
        }
        let status: TaskStatus = request.status.parse().map_err(AppError::Decode)?;

        Ok(NewTask {
            name: request.name,
            description: request.description.unwrap_or_default(),
            status,
        })
    }
}

/// Query parameters for listing tasks
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    pub name: Option<String>,
    pub created_at_from: Option<DateTime<Utc>>,
    pub created_at_to: Option<DateTime<Utc>>,
    pub updated_at_from: Option<DateTime<Utc>>,
    pub updated_at_to: Option<DateTime<Utc>>,
}

impl From<ListTasksQuery> for FilterParameters {
    fn from(query: ListTasksQuery) -> Self {
        FilterParameters {
            name: query.name,
            created_at_from: query.created_at_from,
            created_at_to: query.created_at_to,
            updated_at_from: query.updated_at_from,
            updated_at_to: query.updated_at_to,
        }
    }
}

/// Task as returned on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        TaskResponse {
            id: task.id.to_string(),
            name: task.name,
            description: task.description,
            status: task.status,
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Response for listing tasks
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub amount: usize,
    pub entities: Vec<TaskResponse>,
}

impl From<Vec<Task>> for TaskListResponse {
    fn from(tasks: Vec<Task>) -> Self {
        let entities: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
        TaskListResponse {
            amount: entities.len(),
            entities,
        }
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, AppError> {
    raw.parse()
        .map_err(|e| AppError::Decode(format!("invalid task id '{}': {}", raw, e)))
}

/// POST /tasks
///
/// Create a task. Any `id` in the body is ignored; the server assigns one.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    let Json(request) = payload?;
    let new_task = NewTask::try_from(request)?;

    let task = state.task_service.create(new_task).await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /tasks/:id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, AppError> {
    let id = parse_task_id(&id)?;

    let task = state.task_service.get(&id).await?;

    Ok(Json(task.into()))
}

/// GET /tasks
///
/// List tasks. Every query parameter is optional and they combine with AND.
pub async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> Result<Json<TaskListResponse>, AppError> {
    let Query(query) = query?;
    let filters = FilterParameters::from(query);

    let tasks = state.task_service.list(&filters).await?;

    Ok(Json(tasks.into()))
}

/// PUT /tasks/:id
///
/// Replace a task's name, description and status. Responds 201 like create,
/// which existing clients rely on.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    let id = parse_task_id(&id)?;
    let Json(request) = payload?;
    let new_task = NewTask::try_from(request)?;

    let task = state.task_service.update(&id, new_task).await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// DELETE /tasks/:id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_task_id(&id)?;

    state.task_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
