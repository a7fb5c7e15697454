use async_trait::async_trait;
use quartz_dns_application::ports::RecordStore;
use quartz_dns_domain::{DomainError, RecordRow, RecordType};
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};

/// Record store adapter over the `records` table:
/// `records(apex, subdomain, type, value)`.
pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordRepository {
    /// A row can match both the exact subdomain and the wildcard; every
    /// match is returned in store order, without deduplication.
    #[instrument(skip(self))]
    async fn lookup(
        &self,
        apex: &str,
        record_type: RecordType,
        subdomain: &str,
    ) -> Result<Vec<RecordRow>, DomainError> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT type, value FROM records
             WHERE apex = ? AND type = ? AND (subdomain = ? OR subdomain = '*')",
        )
        .bind(apex)
        .bind(record_type.as_str())
        .bind(subdomain)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Record lookup failed");
            DomainError::Lookup(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .filter_map(|(stored_type, value)| match stored_type.parse::<RecordType>() {
                Ok(record_type) => Some(RecordRow { record_type, value }),
                Err(_) => {
                    warn!(stored_type = %stored_type, "Skipping row with unknown record type");
                    None
                }
            })
            .collect())
    }
}
