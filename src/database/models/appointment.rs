use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub appointment_date: Option<NaiveDateTime>,
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub treatment_details: Option<String>,
    pub status: Option<String>,
    pub customer_id: Option<i64>,
    pub employee_id: Option<i64>,
}

impl Appointment {
    pub const TABLE: &'static str = "appointments";
    pub const DEFAULT_STATUS: &'static str = "SCHEDULED";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInput {
    pub appointment_date: Option<NaiveDateTime>,
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub treatment_details: Option<String>,
    pub status: Option<String>,
}
