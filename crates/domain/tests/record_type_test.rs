use quartz_dns_domain::{DomainError, RecordType};

const ALL: [RecordType; 8] = [
    RecordType::A,
    RecordType::AAAA,
    RecordType::CNAME,
    RecordType::MX,
    RecordType::TXT,
    RecordType::NS,
    RecordType::PTR,
    RecordType::SRV,
];

#[test]
fn test_string_round_trip() {
    for record_type in ALL {
        assert_eq!(
            record_type.as_str().parse::<RecordType>().unwrap(),
            record_type
        );
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("a".parse::<RecordType>().unwrap(), RecordType::A);
    assert_eq!("aaaa".parse::<RecordType>().unwrap(), RecordType::AAAA);
    assert_eq!("Cname".parse::<RecordType>().unwrap(), RecordType::CNAME);
}

#[test]
fn test_from_str_rejects_unknown_types() {
    assert!(matches!(
        "HTTPS".parse::<RecordType>(),
        Err(DomainError::UnknownRecordType(_))
    ));
    assert!("".parse::<RecordType>().is_err());
}

#[test]
fn test_wire_code_round_trip() {
    for record_type in ALL {
        assert_eq!(RecordType::from_u16(record_type.to_u16()), Some(record_type));
    }
}

#[test]
fn test_from_u16_rejects_unserved_codes() {
    assert_eq!(RecordType::from_u16(6), None); // SOA
    assert_eq!(RecordType::from_u16(65), None); // HTTPS
    assert_eq!(RecordType::from_u16(0), None);
}
