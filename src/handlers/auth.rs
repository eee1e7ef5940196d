// handlers/auth.rs - POST /auth/signup, POST /auth/login

use axum::extract::State;

use crate::api::{ApiResponse, ApiResult, Json};
use crate::services::auth_service::{AuthResponse, LoginRequest, SignupRequest};
use crate::services::AuthService;
use crate::state::AppState;

/// POST /auth/signup - register a credential and its profile
pub async fn signup(State(state): State<AppState>, Json(request): Json<SignupRequest>) -> ApiResult<AuthResponse> {
    let response = AuthService::new(state.db).signup(request).await?;
    Ok(ApiResponse::success(response))
}

/// POST /auth/login - verify a credential and issue a fresh token
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> ApiResult<AuthResponse> {
    let response = AuthService::new(state.db).login(request).await?;
    Ok(ApiResponse::success(response))
}
