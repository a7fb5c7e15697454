use hickory_proto::rr::{RData, RecordType as WireRecordType};
use quartz_dns_domain::{Answer, RecordData, RecordType};
use quartz_dns_infrastructure::dns::record_type_map::RecordTypeMapper;
use quartz_dns_infrastructure::dns::wire_record;
use std::net::Ipv4Addr;

fn answer(data: RecordData) -> Answer {
    Answer {
        name: "WWW.Example.COM.".into(),
        ttl: 300,
        data,
    }
}

#[test]
fn test_a_answer_renders_with_original_name_and_ttl() {
    let record = wire_record::to_record(&answer(RecordData::A(Ipv4Addr::new(1, 2, 3, 4)))).unwrap();

    assert_eq!(record.record_type(), WireRecordType::A);
    assert_eq!(record.ttl(), 300);
    assert_eq!(record.name().to_utf8(), "WWW.Example.COM.");
    assert_eq!(record.data(), &RData::A(hickory_proto::rr::rdata::A(Ipv4Addr::new(1, 2, 3, 4))));
}

#[test]
fn test_mx_and_srv_answers_render() {
    let mx = wire_record::to_record(&answer(RecordData::Mx {
        preference: 10,
        exchange: "mail.example.com".into(),
    }))
    .unwrap();
    assert_eq!(mx.record_type(), WireRecordType::MX);

    let srv = wire_record::to_record(&answer(RecordData::Srv {
        priority: 10,
        weight: 5,
        port: 5060,
        target: "sip.example.com".into(),
    }))
    .unwrap();
    assert_eq!(srv.record_type(), WireRecordType::SRV);
}

#[test]
fn test_txt_answer_renders() {
    let txt = wire_record::to_record(&answer(RecordData::Txt("v=spf1 -all".into()))).unwrap();
    assert_eq!(txt.record_type(), WireRecordType::TXT);
}

#[test]
fn test_type_mapper_round_trips_served_types() {
    for record_type in [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::MX,
        RecordType::TXT,
        RecordType::NS,
        RecordType::PTR,
        RecordType::SRV,
    ] {
        let wire = RecordTypeMapper::to_wire(record_type);
        assert_eq!(RecordTypeMapper::from_wire(wire), Some(record_type));
    }
}

#[test]
fn test_type_mapper_rejects_unserved_types() {
    assert_eq!(RecordTypeMapper::from_wire(WireRecordType::SOA), None);
    assert_eq!(RecordTypeMapper::from_wire(WireRecordType::HTTPS), None);
}
