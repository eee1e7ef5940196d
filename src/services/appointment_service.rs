use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::database::models::{Appointment, AppointmentInput};
use crate::database::Repository;
use crate::services::{ServiceError, UserService};

pub struct AppointmentService {
    repository: Repository<Appointment>,
    users: UserService,
}

impl AppointmentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Repository::new(Appointment::TABLE, pool.clone()),
            users: UserService::new(pool),
        }
    }

    pub async fn create(
        &self,
        input: AppointmentInput,
        customer_id: i64,
        employee_id: i64,
    ) -> Result<Appointment, ServiceError> {
        let customer = self.users.require(customer_id, "customer").await?;
        let employee = self.users.require(employee_id, "employee").await?;

        let appointment = sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments \
             (appointment_date, service_type, description, notes, treatment_details, status, customer_id, employee_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(input.appointment_date)
        .bind(&input.service_type)
        .bind(&input.description)
        .bind(&input.notes)
        .bind(&input.treatment_details)
        .bind(input.status.as_deref().unwrap_or(Appointment::DEFAULT_STATUS))
        .bind(customer.id)
        .bind(employee.id)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(appointment)
    }

    pub async fn list_all(&self) -> Result<Vec<Appointment>, ServiceError> {
        Ok(self.repository.select_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Appointment, ServiceError> {
        Ok(self.repository.select_404(id).await?)
    }

    pub async fn update(&self, id: i64, input: AppointmentInput) -> Result<Appointment, ServiceError> {
        let existing = self.get(id).await?;
        let appointment = sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET appointment_date = ?, service_type = ?, description = ?, notes = ?, \
             treatment_details = ?, status = ? WHERE id = ? RETURNING *",
        )
        .bind(input.appointment_date.or(existing.appointment_date))
        .bind(input.service_type.or(existing.service_type))
        .bind(input.description.or(existing.description))
        .bind(input.notes.or(existing.notes))
        .bind(input.treatment_details.or(existing.treatment_details))
        .bind(input.status.or(existing.status))
        .bind(id)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(appointment)
    }

    pub async fn by_customer(&self, customer_id: i64) -> Result<Vec<Appointment>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("customer_id", customer_id);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn by_employee(&self, employee_id: i64) -> Result<Vec<Appointment>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("employee_id", employee_id);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Appointment>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("status", status);
        Ok(self.repository.select_any(filter).await?)
    }

    /// Appointments dated within `[start, end]`, both ends inclusive
    pub async fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Appointment>, ServiceError> {
        let filter = self.repository.filter()?.where_between("appointment_date", start, end);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn by_customer_between(
        &self,
        customer_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Appointment>, ServiceError> {
        let filter = self
            .repository
            .filter()?
            .where_eq("customer_id", customer_id)
            .where_between("appointment_date", start, end);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn by_employee_between(
        &self,
        employee_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Appointment>, ServiceError> {
        let filter = self
            .repository
            .filter()?
            .where_eq("employee_id", employee_id)
            .where_between("appointment_date", start, end);
        Ok(self.repository.select_any(filter).await?)
    }
}
