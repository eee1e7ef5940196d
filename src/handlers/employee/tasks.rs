use axum::extract::State;

use super::OwnerQuery;
use crate::api::{ApiResponse, ApiResult, Json, Path, Query};
use crate::database::models::{Task, TaskInput};
use crate::error::ApiError;
use crate::services::TaskService;
use crate::state::AppState;

/// POST /employee/tasks?createdById&assignedToId - both owners are required
pub async fn create(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
    Json(input): Json<TaskInput>,
) -> ApiResult<Task> {
    let assigned_to_id = query
        .assigned_to_id
        .ok_or_else(|| ApiError::bad_request("Missing query parameter: assignedToId"))?;

    let task = TaskService::new(state.db)
        .create(input, query.created_by_id, assigned_to_id)
        .await?;
    Ok(ApiResponse::success(task))
}

/// GET /employee/tasks
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Task>> {
    let tasks = TaskService::new(state.db).list_all().await?;
    Ok(ApiResponse::success(tasks))
}

/// GET /employee/tasks/assigned/:userId
pub async fn assigned(State(state): State<AppState>, Path(user_id): Path<i64>) -> ApiResult<Vec<Task>> {
    let tasks = TaskService::new(state.db).by_assigned_to(user_id).await?;
    Ok(ApiResponse::success(tasks))
}

/// GET /employee/tasks/created/:userId
pub async fn created(State(state): State<AppState>, Path(user_id): Path<i64>) -> ApiResult<Vec<Task>> {
    let tasks = TaskService::new(state.db).by_created_by(user_id).await?;
    Ok(ApiResponse::success(tasks))
}

/// GET /employee/tasks/status/:status
pub async fn by_status(State(state): State<AppState>, Path(status): Path<String>) -> ApiResult<Vec<Task>> {
    let tasks = TaskService::new(state.db).by_status(&status).await?;
    Ok(ApiResponse::success(tasks))
}

/// GET /employee/tasks/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Task> {
    let task = TaskService::new(state.db).get(id).await?;
    Ok(ApiResponse::success(task))
}

/// PUT /employee/tasks/:id - fields left out of the body keep their stored values
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TaskInput>,
) -> ApiResult<Task> {
    let task = TaskService::new(state.db).update(id, input).await?;
    Ok(ApiResponse::success(task))
}
