use anyhow::Context;
use tracing::info;

use crate::app::app;
use crate::config;
use crate::database::DatabaseManager;
use crate::services::bootstrap::ensure_admin;
use crate::state::AppState;

pub async fn handle(port: Option<u16>) -> anyhow::Result<()> {
    let mut config = config::config().clone();
    if let Some(port) = port {
        config.api.port = port;
    }
    info!("Starting EMS API in {:?} mode", config.environment);

    let manager = DatabaseManager::connect(&config.database)
        .await
        .context("failed to open database")?;

    if ensure_admin(manager.pool()).await.context("failed to seed admin account")? {
        info!("Seeded default administrator");
    }

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("EMS API listening on http://{}", bind_addr);

    let state = AppState::new(manager.pool().clone(), config);
    axum::serve(listener, app(state)).await.context("server error")?;

    manager.close().await;
    Ok(())
}
