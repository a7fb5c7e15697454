use quartz_dns_application::ports::RecordStore;
use quartz_dns_domain::config::DatabaseConfig;
use quartz_dns_domain::RecordType;
use quartz_dns_infrastructure::database::create_read_pool;
use quartz_dns_infrastructure::repositories::SqliteRecordRepository;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use std::str::FromStr;

async fn provision_store(database_url: &str) {
    let options = SqliteConnectOptions::from_str(database_url)
        .unwrap()
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE records(
            apex TEXT NOT NULL,
            subdomain TEXT NOT NULL,
            type TEXT NOT NULL,
            value TEXT NOT NULL,
            UNIQUE(apex,subdomain,type,value))",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO records VALUES ('example.com', 'www', 'A', '1.2.3.4')")
        .execute(&pool)
        .await
        .unwrap();

    pool.close().await;
}

#[tokio::test]
async fn test_read_only_pool_serves_lookups_but_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("records.db");
    let database_url = format!("sqlite:{}", db_path.display());

    provision_store(&database_url).await;

    let pool = create_read_pool(&database_url, &DatabaseConfig::default())
        .await
        .unwrap();

    // Writes are refused at the connection level, not by convention
    let write = sqlx::query("INSERT INTO records VALUES ('example.com', 'x', 'A', '2.2.2.2')")
        .execute(&pool)
        .await;
    assert!(write.is_err());

    let repo = SqliteRecordRepository::new(pool);
    let rows = repo.lookup("example.com", RecordType::A, "www").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value, "1.2.3.4");
}

#[tokio::test]
async fn test_read_only_pool_requires_existing_store() {
    let dir = tempfile::tempdir().unwrap();
    let database_url = format!("sqlite:{}", dir.path().join("missing.db").display());

    let result = create_read_pool(&database_url, &DatabaseConfig::default()).await;

    assert!(result.is_err());
}
