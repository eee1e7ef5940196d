use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Login secret for one username. Read only by the authentication service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Credential {
    pub id: i64,
    pub username: String,
    /// Stored and compared as plain text
    pub password: String,
    pub role: String,
}

impl Credential {
    pub const TABLE: &'static str = "credentials";
}
