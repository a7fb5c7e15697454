use hickory_proto::rr::{rdata, Name, RData, Record};
use quartz_dns_domain::{Answer, RecordData};
use std::str::FromStr;

/// Render a synthesized answer as a wire-format resource record.
///
/// Returns `None` when a name inside the rdata does not form a valid wire
/// name; the caller skips that answer.
pub fn to_record(answer: &Answer) -> Option<Record> {
    let name = Name::from_str(answer.name.as_ref()).ok()?;

    let rdata = match &answer.data {
        RecordData::A(addr) => RData::A(rdata::A(*addr)),
        RecordData::Aaaa(addr) => RData::AAAA(rdata::AAAA(*addr)),
        RecordData::Cname(target) => RData::CNAME(rdata::CNAME(Name::from_str(target).ok()?)),
        RecordData::Mx {
            preference,
            exchange,
        } => RData::MX(rdata::MX::new(*preference, Name::from_str(exchange).ok()?)),
        RecordData::Txt(text) => RData::TXT(rdata::TXT::new(vec![text.to_string()])),
        RecordData::Ns(target) => RData::NS(rdata::NS(Name::from_str(target).ok()?)),
        RecordData::Ptr(target) => RData::PTR(rdata::PTR(Name::from_str(target).ok()?)),
        RecordData::Srv {
            priority,
            weight,
            port,
            target,
        } => RData::SRV(rdata::SRV::new(
            *priority,
            *weight,
            *port,
            Name::from_str(target).ok()?,
        )),
    };

    Some(Record::from_rdata(name, answer.ttl, rdata))
}
