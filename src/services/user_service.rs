use sqlx::SqlitePool;

use crate::database::models::{NewUserProfile, UserProfile};
use crate::database::{DatabaseError, Repository};
use crate::services::ServiceError;

/// Lookups over the user directory
pub struct UserService {
    repository: Repository<UserProfile>,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Repository::new(UserProfile::TABLE, pool),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<UserProfile>, DatabaseError> {
        self.repository.select_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserProfile>, DatabaseError> {
        self.repository.select_id(id).await
    }

    /// Resolve a referenced user or fail with NotFound naming the reference
    pub async fn require(&self, id: i64, reference: &str) -> Result<UserProfile, ServiceError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("{} user {} not found", reference, id)))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserProfile>, DatabaseError> {
        let filter = self.repository.filter()?.where_eq("username", username);
        self.repository.select_one(filter).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, DatabaseError> {
        let filter = self.repository.filter()?.where_eq("email", email);
        self.repository.select_one(filter).await
    }

    pub async fn find_by_role(&self, role: &str) -> Result<Vec<UserProfile>, DatabaseError> {
        let filter = self.repository.filter()?.where_eq("role", role);
        self.repository.select_any(filter).await
    }

    pub async fn create(&self, profile: NewUserProfile) -> Result<UserProfile, DatabaseError> {
        let user = sqlx::query_as::<_, UserProfile>(
            "INSERT INTO users (username, name, email, password, role) VALUES (?, ?, ?, ?, ?) \
             RETURNING id, username, name, email, password, role",
        )
        .bind(&profile.username)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.password)
        .bind(&profile.role)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(user)
    }
}
