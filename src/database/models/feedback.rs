use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub content: Option<String>,
    pub user_id: Option<i64>,
}

impl Feedback {
    pub const TABLE: &'static str = "feedback";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackInput {
    pub content: Option<String>,
}
