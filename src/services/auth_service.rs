use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::database::models::NewUserProfile;
use crate::database::DatabaseError;
use crate::services::{CredentialService, UserService};

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_EMPLOYEE: &str = "EMPLOYEE";
pub const ROLE_CUSTOMER: &str = "CUSTOMER";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Username already present in the credential store
    #[error("{0}")]
    Conflict(String),

    /// Unknown username, wrong password or missing profile
    #[error("{0}")]
    Authentication(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub status: String,
    pub message: String,
    pub username: String,
    pub role: String,
    pub token: String,
    pub user_id: i64,
}

/// Signup and login against the credential store and user directory
pub struct AuthService {
    credentials: CredentialService,
    users: UserService,
}

impl AuthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            credentials: CredentialService::new(pool.clone()),
            users: UserService::new(pool),
        }
    }

    /// Create a credential and its mirrored profile.
    ///
    /// The two inserts commit independently: if the second fails the
    /// credential remains without a profile and login will report
    /// "User profile not found" for that username.
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, AuthError> {
        if self.credentials.exists_by_username(&request.username).await? {
            warn!("Signup rejected, username taken: {}", request.username);
            return Err(username_taken());
        }

        // A concurrent signup can pass the check above; the UNIQUE index decides
        let credential = match self
            .credentials
            .create(&request.username, &request.password, &request.role)
            .await
        {
            Ok(credential) => credential,
            Err(e) if e.is_unique_violation() => {
                warn!("Signup lost race for username: {}", request.username);
                return Err(username_taken());
            }
            Err(e) => return Err(e.into()),
        };

        let user = self
            .users
            .create(NewUserProfile {
                username: request.username,
                name: request.name,
                email: request.email,
                password: Some(request.password),
                role: Some(request.role),
            })
            .await?;

        info!("User registered: {} ({})", credential.username, credential.role);

        Ok(AuthResponse {
            status: "success".to_string(),
            message: "User registered successfully".to_string(),
            username: credential.username,
            role: credential.role,
            token: generate_token(),
            user_id: user.id,
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let credential = self
            .credentials
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed, unknown username: {}", request.username);
                AuthError::Authentication("Invalid username or password".to_string())
            })?;

        // Plain string equality; passwords are not hashed in this store
        if credential.password != request.password {
            warn!("Login failed, wrong password for: {}", request.username);
            return Err(AuthError::Authentication("Invalid username or password".to_string()));
        }

        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed, credential without profile: {}", request.username);
                AuthError::Authentication("User profile not found".to_string())
            })?;

        info!("User logged in: {}", credential.username);

        Ok(AuthResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            username: credential.username,
            role: credential.role,
            token: generate_token(),
            user_id: user.id,
        })
    }
}

fn username_taken() -> AuthError {
    AuthError::Conflict("Username already exists".to_string())
}

/// Opaque bearer value: random, never signed, never expires, never checked again
pub fn generate_token() -> String {
    Uuid::new_v4().to_string()
}
