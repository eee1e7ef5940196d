use sqlx::SqlitePool;

use crate::database::models::Credential;
use crate::database::{DatabaseError, Repository};

/// The credential store. Rows are created at signup/bootstrap and never updated.
pub struct CredentialService {
    repository: Repository<Credential>,
}

impl CredentialService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Repository::new(Credential::TABLE, pool),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DatabaseError> {
        let filter = self.repository.filter()?.where_eq("username", username);
        self.repository.select_one(filter).await
    }

    pub async fn exists_by_username(&self, username: &str) -> Result<bool, DatabaseError> {
        let filter = self.repository.filter()?.where_eq("username", username);
        Ok(self.repository.count(filter).await? > 0)
    }

    pub async fn create(&self, username: &str, password: &str, role: &str) -> Result<Credential, DatabaseError> {
        let credential = sqlx::query_as::<_, Credential>(
            "INSERT INTO credentials (username, password, role) VALUES (?, ?, ?) \
             RETURNING id, username, password, role",
        )
        .bind(username)
        .bind(password)
        .bind(role)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(credential)
    }
}
