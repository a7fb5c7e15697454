use crate::errors::DomainError;
use crate::record_type::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// One row returned by the record store: the stored type plus its textual
/// value, exactly as the store yielded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub record_type: RecordType,
    pub value: String,
}

/// Typed rdata parsed from a row's textual value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(Arc<str>),
    Mx {
        preference: u16,
        exchange: Arc<str>,
    },
    Txt(Arc<str>),
    Ns(Arc<str>),
    Ptr(Arc<str>),
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: Arc<str>,
    },
}

impl RecordData {
    /// Parse a stored textual value under the grammar of its record type.
    ///
    /// Failure means this single row cannot be synthesized; the caller skips
    /// the row and keeps processing the rest of the result set.
    pub fn parse(record_type: RecordType, value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();

        let parsed = match record_type {
            RecordType::A => trimmed.parse::<Ipv4Addr>().ok().map(RecordData::A),

            RecordType::AAAA => trimmed.parse::<Ipv6Addr>().ok().map(RecordData::Aaaa),

            RecordType::CNAME => parse_host(trimmed).map(RecordData::Cname),

            RecordType::NS => parse_host(trimmed).map(RecordData::Ns),

            RecordType::PTR => parse_host(trimmed).map(RecordData::Ptr),

            RecordType::TXT => {
                if trimmed.is_empty() {
                    None
                } else {
                    Some(RecordData::Txt(Arc::from(unquote(trimmed))))
                }
            }

            RecordType::MX => {
                // "<preference> <exchange>", e.g. "10 mail.example.com"
                let fields: Vec<&str> = trimmed.split_whitespace().collect();
                match fields.as_slice() {
                    &[preference, exchange] => preference.parse::<u16>().ok().and_then(|preference| {
                        parse_host(exchange).map(|exchange| RecordData::Mx {
                            preference,
                            exchange,
                        })
                    }),
                    _ => None,
                }
            }

            RecordType::SRV => {
                // "<priority> <weight> <port> <target>"
                let fields: Vec<&str> = trimmed.split_whitespace().collect();
                match fields.as_slice() {
                    &[priority, weight, port, target] => {
                        match (
                            priority.parse::<u16>(),
                            weight.parse::<u16>(),
                            port.parse::<u16>(),
                            parse_host(target),
                        ) {
                            (Ok(priority), Ok(weight), Ok(port), Some(target)) => {
                                Some(RecordData::Srv {
                                    priority,
                                    weight,
                                    port,
                                    target,
                                })
                            }
                            _ => None,
                        }
                    }
                    _ => None,
                }
            }
        };

        parsed.ok_or_else(|| DomainError::Synthesis(record_type, value.to_string()))
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Mx { .. } => RecordType::MX,
            RecordData::Txt(_) => RecordType::TXT,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Ptr(_) => RecordType::PTR,
            RecordData::Srv { .. } => RecordType::SRV,
        }
    }
}

/// Validate a host-shaped value: non-empty, at most 255 octets, letters,
/// digits, dots, hyphens and underscores only. `.` alone (the root) is
/// accepted, as in null MX targets.
fn parse_host(value: &str) -> Option<Arc<str>> {
    if value.is_empty() || value.len() > 255 {
        return None;
    }
    if value == "." {
        return Some(Arc::from(value));
    }
    let valid = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_');
    if valid {
        Some(Arc::from(value))
    } else {
        None
    }
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Whether the answers came from the record store or from the configured
/// fallback pair. Not visible on the wire: both are plain NoError replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Stored,
    Fallback,
}

/// One synthesized resource record, carrying the original question name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: Arc<str>,
    pub ttl: u32,
    pub data: RecordData,
}

/// The resolved reply for one question. Answer order is store iteration
/// order; a row matching both an exact subdomain and a wildcard is returned
/// for each match, without deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub answers: Vec<Answer>,
    pub source: ReplySource,
}
