use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::database::models::{Task, TaskInput};
use crate::database::Repository;
use crate::services::{ServiceError, UserService};

pub struct TaskService {
    repository: Repository<Task>,
    users: UserService,
}

impl TaskService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Repository::new(Task::TABLE, pool.clone()),
            users: UserService::new(pool),
        }
    }

    pub async fn create(&self, input: TaskInput, created_by_id: i64, assigned_to_id: i64) -> Result<Task, ServiceError> {
        let created_by = self.users.require(created_by_id, "createdBy").await?;
        let assigned_to = self.users.require(assigned_to_id, "assignedTo").await?;

        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, description, priority, status, due_date, created_by_id, assigned_to_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.priority)
        .bind(input.status.as_deref().unwrap_or(Task::DEFAULT_STATUS))
        .bind(input.due_date)
        .bind(created_by.id)
        .bind(assigned_to.id)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(task)
    }

    pub async fn list_all(&self) -> Result<Vec<Task>, ServiceError> {
        Ok(self.repository.select_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Task, ServiceError> {
        Ok(self.repository.select_404(id).await?)
    }

    /// Overwrite the fields present in `input`; owners are left untouched
    pub async fn update(&self, id: i64, input: TaskInput) -> Result<Task, ServiceError> {
        let existing = self.get(id).await?;
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = ?, description = ?, priority = ?, status = ?, due_date = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(input.title.or(existing.title))
        .bind(input.description.or(existing.description))
        .bind(input.priority.or(existing.priority))
        .bind(input.status.or(existing.status))
        .bind(input.due_date.or(existing.due_date))
        .bind(id)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(task)
    }

    pub async fn by_assigned_to(&self, user_id: i64) -> Result<Vec<Task>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("assigned_to_id", user_id);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn by_created_by(&self, user_id: i64) -> Result<Vec<Task>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("created_by_id", user_id);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Task>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("status", status);
        Ok(self.repository.select_any(filter).await?)
    }

    /// Tasks whose due date lies in `[start, end]`, both ends inclusive
    pub async fn due_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Task>, ServiceError> {
        let filter = self.repository.filter()?.where_between("due_date", start, end);
        Ok(self.repository.select_any(filter).await?)
    }
}
