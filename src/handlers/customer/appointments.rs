use axum::extract::State;
use serde::Deserialize;

use crate::api::{ApiResponse, ApiResult, Json, Path, Query};
use crate::database::models::{Appointment, AppointmentInput};
use crate::services::AppointmentService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuery {
    pub customer_id: i64,
    pub employee_id: i64,
}

/// POST /customer/appointments?customerId&employeeId
pub async fn book(
    State(state): State<AppState>,
    Query(query): Query<BookingQuery>,
    Json(input): Json<AppointmentInput>,
) -> ApiResult<Appointment> {
    let appointment = AppointmentService::new(state.db)
        .create(input, query.customer_id, query.employee_id)
        .await?;
    Ok(ApiResponse::success(appointment))
}

/// GET /customer/appointments/history/:customerId
pub async fn history(State(state): State<AppState>, Path(customer_id): Path<i64>) -> ApiResult<Vec<Appointment>> {
    let appointments = AppointmentService::new(state.db).by_customer(customer_id).await?;
    Ok(ApiResponse::success(appointments))
}
