use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub document_type: Option<String>,
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub created_by_id: Option<i64>,
    pub assigned_to_id: Option<i64>,
}

impl Document {
    pub const TABLE: &'static str = "documents";
    pub const DEFAULT_STATUS: &'static str = "PENDING";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInput {
    pub document_type: Option<String>,
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub status: Option<String>,
}
