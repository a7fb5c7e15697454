use quartz_dns_domain::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open the record store for resolution. The connection itself is read-only,
/// so the no-writes contract holds at the connection level rather than by
/// convention, and the file must already exist (records are ingested
/// out-of-band).
pub async fn create_read_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(cfg.read_pool_max_connections)
        .connect_with(options)
        .await
}
