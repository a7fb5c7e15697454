//! Quartz DNS Domain Layer
pub mod apex;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod question;
pub mod record_data;
pub mod record_type;

pub use apex::{split_apex, ApexSplit, APEX_SUBDOMAIN, WILDCARD_SUBDOMAIN};
pub use config::Config;
pub use errors::DomainError;
pub use fallback::FallbackAnswers;
pub use question::Question;
pub use record_data::{Answer, RecordData, RecordRow, Reply, ReplySource};
pub use record_type::RecordType;
