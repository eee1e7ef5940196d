use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;

/// Shared by every handler; services are built per request from the pool
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
