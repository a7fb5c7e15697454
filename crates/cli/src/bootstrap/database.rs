use quartz_dns_domain::config::DatabaseConfig;
use quartz_dns_infrastructure::database::create_read_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(database_url: &str, cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Opening record store read-only: {}", database_url);

    let pool = create_read_pool(database_url, cfg).await.map_err(|e| {
        error!("Failed to open record store: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Record store ready (read pool max={})",
        cfg.read_pool_max_connections
    );

    Ok(pool)
}
