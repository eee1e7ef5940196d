use chrono::Local;
use sqlx::SqlitePool;

use crate::database::models::{Inbox, Message, MessageInput};
use crate::database::Repository;
use crate::services::{ServiceError, UserService};

pub struct MessageService {
    repository: Repository<Message>,
    users: UserService,
}

impl MessageService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Repository::new(Message::TABLE, pool.clone()),
            users: UserService::new(pool),
        }
    }

    /// New messages start unread and are stamped with the current time
    pub async fn send(&self, input: MessageInput, sender_id: i64, recipient_id: i64) -> Result<Message, ServiceError> {
        let sender = self.users.require(sender_id, "sender").await?;
        let recipient = self.users.require(recipient_id, "recipient").await?;

        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (subject, content, is_read, sent_at, sender_id, recipient_id) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&input.subject)
        .bind(&input.content)
        .bind(false)
        .bind(Local::now().naive_local())
        .bind(sender.id)
        .bind(recipient.id)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(message)
    }

    pub async fn by_sender(&self, user_id: i64) -> Result<Vec<Message>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("sender_id", user_id);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn by_recipient(&self, user_id: i64) -> Result<Vec<Message>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("recipient_id", user_id);
        Ok(self.repository.select_any(filter).await?)
    }

    /// Sent and received messages for one user. A message only lands in both
    /// groups when the user sent it to themself.
    pub async fn inbox(&self, user_id: i64) -> Result<Inbox, ServiceError> {
        Ok(Inbox {
            sent: self.by_sender(user_id).await?,
            received: self.by_recipient(user_id).await?,
        })
    }

    pub async fn by_recipient_and_read(&self, user_id: i64, is_read: bool) -> Result<Vec<Message>, ServiceError> {
        let filter = self
            .repository
            .filter()?
            .where_eq("recipient_id", user_id)
            .where_eq("is_read", is_read);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn mark_read(&self, id: i64) -> Result<Message, ServiceError> {
        self.repository.select_404(id).await?;
        let message = sqlx::query_as::<_, Message>("UPDATE messages SET is_read = ? WHERE id = ? RETURNING *")
            .bind(true)
            .bind(id)
            .fetch_one(self.repository.pool())
            .await?;
        Ok(message)
    }
}
