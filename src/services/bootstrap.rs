use sqlx::SqlitePool;
use tracing::info;

use crate::database::models::NewUserProfile;
use crate::services::auth_service::{AuthError, ROLE_ADMIN};
use crate::services::{CredentialService, UserService};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
const ADMIN_NAME: &str = "Administrator";
const ADMIN_EMAIL: &str = "admin@example.com";

/// Startup hook: seed the administrator account unless a credential named
/// "admin" already exists. Returns whether anything was created.
pub async fn ensure_admin(pool: &SqlitePool) -> Result<bool, AuthError> {
    let credentials = CredentialService::new(pool.clone());
    if credentials.exists_by_username(ADMIN_USERNAME).await? {
        return Ok(false);
    }

    info!("Creating admin user...");
    credentials.create(ADMIN_USERNAME, ADMIN_PASSWORD, ROLE_ADMIN).await?;

    UserService::new(pool.clone())
        .create(NewUserProfile {
            username: ADMIN_USERNAME.to_string(),
            name: Some(ADMIN_NAME.to_string()),
            email: Some(ADMIN_EMAIL.to_string()),
            password: Some(ADMIN_PASSWORD.to_string()),
            role: Some(ROLE_ADMIN.to_string()),
        })
        .await?;

    info!("Admin user created successfully");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::database::DatabaseManager;
    use crate::services::auth_service::{AuthService, LoginRequest};

    #[tokio::test]
    async fn seeds_once_and_is_idempotent() {
        let config = AppConfig::for_testing("uploads");
        let manager = DatabaseManager::connect(&config.database).await.unwrap();
        let pool = manager.pool();

        assert!(ensure_admin(pool).await.unwrap());
        assert!(!ensure_admin(pool).await.unwrap());

        let (credentials,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM credentials WHERE username = 'admin'")
            .fetch_one(pool)
            .await
            .unwrap();
        let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = 'admin'")
            .fetch_one(pool)
            .await
            .unwrap();
        assert_eq!((credentials, users), (1, 1));

        let login = AuthService::new(pool.clone())
            .login(LoginRequest {
                username: ADMIN_USERNAME.to_string(),
                password: ADMIN_PASSWORD.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(login.role, ROLE_ADMIN);
    }
}
