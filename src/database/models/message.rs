use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub subject: Option<String>,
    pub content: Option<String>,
    pub is_read: bool,
    pub sent_at: Option<NaiveDateTime>,
    pub sender_id: Option<i64>,
    pub recipient_id: Option<i64>,
}

impl Message {
    pub const TABLE: &'static str = "messages";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageInput {
    pub subject: Option<String>,
    pub content: Option<String>,
}

/// A user's messages split by direction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inbox {
    pub sent: Vec<Message>,
    pub received: Vec<Message>,
}
