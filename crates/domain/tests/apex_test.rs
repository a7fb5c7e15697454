use quartz_dns_domain::{split_apex, DomainError, APEX_SUBDOMAIN};

#[test]
fn test_subdomain_split() {
    let split = split_apex("www.example.com").unwrap();
    assert_eq!(split.apex, "example.com");
    assert_eq!(split.subdomain, "www");
}

#[test]
fn test_apex_query_uses_sentinel() {
    let split = split_apex("example.com").unwrap();
    assert_eq!(split.apex, "example.com");
    assert_eq!(split.subdomain, APEX_SUBDOMAIN);
}

#[test]
fn test_trailing_dot_and_case_normalized() {
    let split = split_apex("WWW.Example.COM.").unwrap();
    assert_eq!(split.apex, "example.com");
    assert_eq!(split.subdomain, "www");
}

#[test]
fn test_multi_label_subdomain() {
    let split = split_apex("a.b.example.com").unwrap();
    assert_eq!(split.apex, "example.com");
    assert_eq!(split.subdomain, "a.b");
}

#[test]
fn test_multi_label_public_suffix() {
    let split = split_apex("shop.example.co.uk").unwrap();
    assert_eq!(split.apex, "example.co.uk");
    assert_eq!(split.subdomain, "shop");
}

#[test]
fn test_bare_label_fails_classification() {
    match split_apex("localhost") {
        Err(DomainError::Classification(name)) => assert_eq!(name, "localhost"),
        other => panic!("expected classification error, got {other:?}"),
    }
}

#[test]
fn test_bare_public_suffix_fails_classification() {
    assert!(matches!(
        split_apex("com"),
        Err(DomainError::Classification(_))
    ));
    assert!(matches!(
        split_apex("co.uk."),
        Err(DomainError::Classification(_))
    ));
}

#[test]
fn test_empty_name_fails_classification() {
    assert!(matches!(
        split_apex("."),
        Err(DomainError::Classification(_))
    ));
}

#[test]
fn test_split_reconstructs_normalized_name() {
    for name in ["www.example.com.", "Mail.Example.ORG", "a.b.c.example.net"] {
        let normalized = name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase();
        let split = split_apex(name).unwrap();
        assert!(normalized.ends_with(&split.apex));
        assert_eq!(format!("{}.{}", split.subdomain, split.apex), normalized);
    }
}
