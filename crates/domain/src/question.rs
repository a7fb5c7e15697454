use crate::record_type::RecordType;
use std::sync::Arc;

/// A single inbound DNS question, as received off the wire. The name keeps
/// its original case and trailing dot; synthesized answers carry it back
/// unmodified.
#[derive(Debug, Clone)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
