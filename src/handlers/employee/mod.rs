// handlers/employee/mod.rs - /employee/* handlers

pub mod appointments; // GET /employee/appointments[/:id], employee/:userId, PUT /employee/appointments/:id
pub mod calendar;     // GET /employee/calendar/:userId
pub mod documents;    // /employee/documents[/:id], created/assigned lookups, POST /employee/documents/upload
pub mod tasks;        // /employee/tasks[/:id], assigned/created/status lookups

use serde::Deserialize;

/// `?createdById&assignedToId` on task and document creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    pub created_by_id: i64,
    pub assigned_to_id: Option<i64>,
}
