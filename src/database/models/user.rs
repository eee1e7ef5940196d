use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Business-facing identity referenced by every registry.
///
/// Mirrors a [`Credential`](super::credential::Credential) with the same
/// username and role. The password copy is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    pub role: Option<String>,
}

impl UserProfile {
    pub const TABLE: &'static str = "users";
}

#[derive(Debug, Clone)]
pub struct NewUserProfile {
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}
