//! Guild ban store maintenance
//!
//! Run with:
//! ```bash
//! cargo run -p guildban-service --bin guildban-prune
//! ```
//!
//! Loads every stored guild ban the way the game server does at startup,
//! which deletes the expired ones, and reports what is left.

use std::sync::Arc;

use guildban_common::{try_init_tracing, GuildBanConfig};
use guildban_db::{create_pool, DatabaseConfig, PgGuildBanRepository};
use guildban_service::GuildBanRegistry;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Guild ban prune failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = GuildBanConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;
    let db_config = DatabaseConfig::from_env();

    info!(
        enabled = config.enabled,
        max_connections = db_config.max_connections,
        "Configuration loaded"
    );

    let pool = create_pool(&db_config).await?;
    let registry = GuildBanRegistry::new(Arc::new(PgGuildBanRepository::new(pool)), config);

    let loaded = registry.load_from_store().await?;
    info!(loaded, "Guild ban store pruned");

    Ok(())
}
