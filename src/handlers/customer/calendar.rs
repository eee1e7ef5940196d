use axum::extract::State;

use crate::api::{ApiResponse, ApiResult, Path, Query};
use crate::database::models::Appointment;
use crate::handlers::DateSpanQuery;
use crate::services::CalendarService;
use crate::state::AppState;

/// GET /customer/calendar/:customerId?start&end - the customer's appointments
/// between start 00:00 and the last instant of end
pub async fn customer_calendar(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
    Query(span): Query<DateSpanQuery>,
) -> ApiResult<Vec<Appointment>> {
    let appointments = CalendarService::new(state.db)
        .customer(customer_id, span.start, span.end)
        .await?;
    Ok(ApiResponse::success(appointments))
}
