// handlers/users.rs - read-only user directory

use axum::extract::State;

use crate::api::{ApiResponse, ApiResult, Path};
use crate::database::models::UserProfile;
use crate::error::ApiError;
use crate::services::UserService;
use crate::state::AppState;

/// GET /users
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<UserProfile>> {
    let users = UserService::new(state.db).list_all().await?;
    Ok(ApiResponse::success(users))
}

/// GET /users/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<UserProfile> {
    let user = UserService::new(state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User not found with id: {}", id)))?;
    Ok(ApiResponse::success(user))
}

/// GET /users/email/:email
pub async fn by_email(State(state): State<AppState>, Path(email): Path<String>) -> ApiResult<UserProfile> {
    let user = UserService::new(state.db)
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User not found with email: {}", email)))?;
    Ok(ApiResponse::success(user))
}

/// GET /users/role/:role - role names are matched exactly (ADMIN, EMPLOYEE, CUSTOMER)
pub async fn by_role(State(state): State<AppState>, Path(role): Path<String>) -> ApiResult<Vec<UserProfile>> {
    let users = UserService::new(state.db).find_by_role(&role).await?;
    Ok(ApiResponse::success(users))
}
