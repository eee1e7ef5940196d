use anyhow::Context;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config;
use crate::database::DatabaseManager;
use crate::services::bootstrap::{ensure_admin, ADMIN_USERNAME};

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let manager = DatabaseManager::connect(&config::config().database)
        .await
        .context("failed to open database")?;

    let created = ensure_admin(manager.pool()).await.context("failed to seed admin account")?;
    manager.close().await;

    match output_format {
        OutputFormat::Json => {
            println!("{}", json!({ "username": ADMIN_USERNAME, "created": created }));
        }
        OutputFormat::Text => {
            if created {
                println!("Created administrator '{}'", ADMIN_USERNAME);
            } else {
                println!("Administrator '{}' already exists", ADMIN_USERNAME);
            }
        }
    }
    Ok(())
}
