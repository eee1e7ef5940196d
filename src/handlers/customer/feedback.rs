use axum::extract::State;
use serde::Deserialize;

use crate::api::{ApiResponse, ApiResult, Json, Path, Query};
use crate::database::models::{Feedback, FeedbackInput};
use crate::services::FeedbackService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQuery {
    pub customer_id: i64,
}

/// POST /customer/feedback?customerId
pub async fn submit(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
    Json(input): Json<FeedbackInput>,
) -> ApiResult<Feedback> {
    let feedback = FeedbackService::new(state.db).create(input, query.customer_id).await?;
    Ok(ApiResponse::success(feedback))
}

/// GET /customer/feedback/:customerId
pub async fn list(State(state): State<AppState>, Path(customer_id): Path<i64>) -> ApiResult<Vec<Feedback>> {
    let feedback = FeedbackService::new(state.db).by_user(customer_id).await?;
    Ok(ApiResponse::success(feedback))
}
