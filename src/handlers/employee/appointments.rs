use axum::extract::State;

use crate::api::{ApiResponse, ApiResult, Json, Path};
use crate::database::models::{Appointment, AppointmentInput};
use crate::services::AppointmentService;
use crate::state::AppState;

/// GET /employee/appointments
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Appointment>> {
    let appointments = AppointmentService::new(state.db).list_all().await?;
    Ok(ApiResponse::success(appointments))
}

/// GET /employee/appointments/employee/:userId
pub async fn for_employee(State(state): State<AppState>, Path(user_id): Path<i64>) -> ApiResult<Vec<Appointment>> {
    let appointments = AppointmentService::new(state.db).by_employee(user_id).await?;
    Ok(ApiResponse::success(appointments))
}

/// GET /employee/appointments/status/:status
pub async fn by_status(State(state): State<AppState>, Path(status): Path<String>) -> ApiResult<Vec<Appointment>> {
    let appointments = AppointmentService::new(state.db).by_status(&status).await?;
    Ok(ApiResponse::success(appointments))
}

/// GET /employee/appointments/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Appointment> {
    let appointment = AppointmentService::new(state.db).get(id).await?;
    Ok(ApiResponse::success(appointment))
}

/// PUT /employee/appointments/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<AppointmentInput>,
) -> ApiResult<Appointment> {
    let appointment = AppointmentService::new(state.db).update(id, input).await?;
    Ok(ApiResponse::success(appointment))
}
