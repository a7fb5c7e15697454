use crate::record_type::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("No registrable apex in name: {0}")]
    Classification(String),

    #[error("Record lookup failed: {0}")]
    Lookup(String),

    #[error("Cannot synthesize {0} record from '{1}'")]
    Synthesis(RecordType, String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),
}
