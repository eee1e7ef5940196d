// handlers/system.rs - GET / and GET /health

use axum::extract::State;
use serde_json::{json, Value};

use crate::api::{ApiResponse, ApiResult};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn root() -> ApiResult<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Ok(ApiResponse::success(json!({
        "name": "EMS API",
        "version": version,
        "description": "Employee and customer management backend built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "auth": "/auth/signup, /auth/login",
            "customer": "/customer/appointments, /customer/calendar/:customerId, /customer/feedback, /customer/messages",
            "employee": "/employee/tasks, /employee/documents, /employee/appointments, /employee/calendar/:userId",
            "users": "/users[/:id], /users/role/:role, /users/email/:email",
        }
    })))
}

/// Database down answers 503 with the usual error body
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    DatabaseManager::health_check(&state.db).await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        ApiError::ServiceUnavailable("Database unavailable".to_string())
    })?;

    Ok(ApiResponse::success(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "database": "ok"
    })))
}
