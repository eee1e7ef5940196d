use axum::extract::State;
use serde::Deserialize;

use crate::api::{ApiResponse, ApiResult, Json, Path, Query};
use crate::database::models::{Inbox, Message, MessageInput};
use crate::services::MessageService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendQuery {
    pub sender_id: i64,
    pub recipient_id: i64,
}

/// POST /customer/messages?senderId&recipientId
pub async fn send(
    State(state): State<AppState>,
    Query(query): Query<SendQuery>,
    Json(input): Json<MessageInput>,
) -> ApiResult<Message> {
    let message = MessageService::new(state.db)
        .send(input, query.sender_id, query.recipient_id)
        .await?;
    Ok(ApiResponse::success(message))
}

/// GET /customer/messages/:customerId → {sent, received}
pub async fn inbox(State(state): State<AppState>, Path(customer_id): Path<i64>) -> ApiResult<Inbox> {
    let inbox = MessageService::new(state.db).inbox(customer_id).await?;
    Ok(ApiResponse::success(inbox))
}

/// GET /customer/messages/:customerId/unread
pub async fn unread(State(state): State<AppState>, Path(customer_id): Path<i64>) -> ApiResult<Vec<Message>> {
    let messages = MessageService::new(state.db)
        .by_recipient_and_read(customer_id, false)
        .await?;
    Ok(ApiResponse::success(messages))
}

/// PUT /customer/messages/:id/read
pub async fn mark_read(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Message> {
    let message = MessageService::new(state.db).mark_read(id).await?;
    Ok(ApiResponse::success(message))
}
