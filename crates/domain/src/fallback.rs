use crate::record_data::{Answer, RecordData, Reply, ReplySource};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Fixed default answers served whenever a question cannot be resolved from
/// the record store. Built once at startup from validated configuration
/// (`FallbackConfig::build`); construction can no longer fail at query time.
///
/// The TTL applies to every record this resolver emits, stored or fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackAnswers {
    pub ipv4: Ipv4Addr,
    pub ipv6: Ipv6Addr,
    pub ttl: u32,
}

impl FallbackAnswers {
    pub fn new(ipv4: Ipv4Addr, ipv6: Ipv6Addr, ttl: u32) -> Self {
        Self { ipv4, ipv6, ttl }
    }

    /// Exactly one A and one AAAA record for the given question name.
    pub fn reply(&self, name: &Arc<str>) -> Reply {
        Reply {
            answers: vec![
                Answer {
                    name: name.clone(),
                    ttl: self.ttl,
                    data: RecordData::A(self.ipv4),
                },
                Answer {
                    name: name.clone(),
                    ttl: self.ttl,
                    data: RecordData::Aaaa(self.ipv6),
                },
            ],
            source: ReplySource::Fallback,
        }
    }
}
