use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::database::models::{Appointment, Task};
use crate::services::{AppointmentService, ServiceError, TaskService};

/// Employee calendar: both registries keyed by category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCalendar {
    pub tasks: Vec<Task>,
    pub appointments: Vec<Appointment>,
}

/// Expand a span of calendar dates to `[start 00:00:00, end 23:59:59.999999999]`.
/// An inverted span is passed through and simply matches nothing.
pub fn day_span(start: NaiveDate, end: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let end_of_day = end.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::nanoseconds(1);
    (start.and_time(NaiveTime::MIN), end_of_day)
}

pub struct CalendarService {
    tasks: TaskService,
    appointments: AppointmentService,
}

impl CalendarService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            tasks: TaskService::new(pool.clone()),
            appointments: AppointmentService::new(pool),
        }
    }

    pub async fn customer(&self, customer_id: i64, start: NaiveDate, end: NaiveDate) -> Result<Vec<Appointment>, ServiceError> {
        let (from, to) = day_span(start, end);
        self.appointments.by_customer_between(customer_id, from, to).await
    }

    /// Appointments are limited to the span; assigned tasks are returned
    /// regardless of due date.
    pub async fn employee(&self, user_id: i64, start: NaiveDate, end: NaiveDate) -> Result<EmployeeCalendar, ServiceError> {
        let (from, to) = day_span(start, end);
        Ok(EmployeeCalendar {
            tasks: self.tasks.by_assigned_to(user_id).await?,
            appointments: self.appointments.by_employee_between(user_id, from, to).await?,
        })
    }
}
