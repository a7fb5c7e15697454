use async_trait::async_trait;
use quartz_dns_domain::{DomainError, RecordRow, RecordType};

/// Read-only access to the backing record store.
///
/// One parameterized read: rows whose apex and type match exactly and whose
/// subdomain equals the requested subdomain or the wildcard sentinel `"*"`.
/// Implementations pass row order through unchanged and never write.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn lookup(
        &self,
        apex: &str,
        record_type: RecordType,
        subdomain: &str,
    ) -> Result<Vec<RecordRow>, DomainError>;
}
