use axum::extract::State;

use crate::api::{ApiResponse, ApiResult, Path, Query};
use crate::handlers::DateSpanQuery;
use crate::services::calendar_service::EmployeeCalendar;
use crate::services::CalendarService;
use crate::state::AppState;

/// GET /employee/calendar/:userId?start&end → {tasks, appointments}
///
/// `tasks` holds every task assigned to the user whatever its due date;
/// only `appointments` is limited to the span.
pub async fn employee_calendar(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(span): Query<DateSpanQuery>,
) -> ApiResult<EmployeeCalendar> {
    let calendar = CalendarService::new(state.db)
        .employee(user_id, span.start, span.end)
        .await?;
    Ok(ApiResponse::success(calendar))
}
