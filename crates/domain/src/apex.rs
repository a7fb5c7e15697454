use crate::errors::DomainError;

/// Subdomain sentinel for a query that targets the apex itself.
pub const APEX_SUBDOMAIN: &str = "@";

/// Subdomain value stored for wildcard rows.
pub const WILDCARD_SUBDOMAIN: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApexSplit {
    /// Registrable domain (effective TLD plus one label).
    pub apex: String,
    /// Labels left of the apex, or `"@"` when the name equals its apex.
    pub subdomain: String,
}

/// Decompose a fully-qualified query name into (apex, subdomain) under
/// public-suffix rules. The name is normalized first: one trailing root dot
/// stripped, then lower-cased.
///
/// Names with no registrable apex (bare labels, bare public suffixes) fail
/// classification; callers treat that as non-fatal and serve the fallback
/// answer.
pub fn split_apex(name: &str) -> Result<ApexSplit, DomainError> {
    let fqdn = name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase();

    let apex = psl::domain_str(&fqdn)
        .ok_or_else(|| DomainError::Classification(fqdn.clone()))?;

    let subdomain = if fqdn.len() > apex.len() {
        fqdn[..fqdn.len() - apex.len() - 1].to_string()
    } else {
        APEX_SUBDOMAIN.to_string()
    };

    Ok(ApexSplit {
        apex: apex.to_string(),
        subdomain,
    })
}
