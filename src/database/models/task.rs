use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub created_by_id: Option<i64>,
    pub assigned_to_id: Option<i64>,
}

impl Task {
    pub const TABLE: &'static str = "tasks";
    pub const DEFAULT_STATUS: &'static str = "PENDING";
}

/// Client-supplied task fields. Owners come from query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDateTime>,
}
