use hickory_proto::rr::RecordType as WireRecordType;
use quartz_dns_domain::RecordType;

/// Mapping between `quartz_dns_domain::RecordType` and the hickory wire type.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_wire(record_type: RecordType) -> WireRecordType {
        match record_type {
            RecordType::A => WireRecordType::A,
            RecordType::AAAA => WireRecordType::AAAA,
            RecordType::CNAME => WireRecordType::CNAME,
            RecordType::MX => WireRecordType::MX,
            RecordType::TXT => WireRecordType::TXT,
            RecordType::NS => WireRecordType::NS,
            RecordType::PTR => WireRecordType::PTR,
            RecordType::SRV => WireRecordType::SRV,
        }
    }

    /// Returns `None` for query types the store does not serve; the handler
    /// answers those with the fallback pair.
    pub fn from_wire(wire_type: WireRecordType) -> Option<RecordType> {
        match wire_type {
            WireRecordType::A => Some(RecordType::A),
            WireRecordType::AAAA => Some(RecordType::AAAA),
            WireRecordType::CNAME => Some(RecordType::CNAME),
            WireRecordType::MX => Some(RecordType::MX),
            WireRecordType::TXT => Some(RecordType::TXT),
            WireRecordType::NS => Some(RecordType::NS),
            WireRecordType::PTR => Some(RecordType::PTR),
            WireRecordType::SRV => Some(RecordType::SRV),
            _ => None,
        }
    }
}
