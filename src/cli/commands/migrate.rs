use anyhow::Context;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config;
use crate::database::DatabaseManager;

/// Connecting applies pending migrations; nothing else to do afterwards
pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let url = &config::config().database.url;
    let manager = DatabaseManager::connect(&config::config().database)
        .await
        .context("failed to migrate database")?;
    manager.close().await;

    match output_format {
        OutputFormat::Json => println!("{}", json!({ "database": url, "migrated": true })),
        OutputFormat::Text => println!("Database {} is up to date", url),
    }
    Ok(())
}
