use sqlx::SqlitePool;

use crate::database::models::{Feedback, FeedbackInput};
use crate::database::Repository;
use crate::services::{ServiceError, UserService};

pub struct FeedbackService {
    repository: Repository<Feedback>,
    users: UserService,
}

impl FeedbackService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Repository::new(Feedback::TABLE, pool.clone()),
            users: UserService::new(pool),
        }
    }

    pub async fn create(&self, input: FeedbackInput, customer_id: i64) -> Result<Feedback, ServiceError> {
        let customer = self.users.require(customer_id, "customer").await?;
        let feedback = sqlx::query_as::<_, Feedback>(
            "INSERT INTO feedback (content, user_id) VALUES (?, ?) RETURNING *",
        )
        .bind(&input.content)
        .bind(customer.id)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(feedback)
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Feedback>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("user_id", user_id);
        Ok(self.repository.select_any(filter).await?)
    }
}
