use crate::PersonName;

#[test]
fn test_split_multi_token_name() {
    let name = PersonName::split("Ana Pérez López").unwrap();
    assert_eq!(name.first_name, "Ana");
    assert_eq!(name.last_name, "Pérez López");
}

#[test]
fn test_split_single_token_name() {
    let name = PersonName::split("Ana").unwrap();
    assert_eq!(name.first_name, "Ana");
    assert_eq!(name.last_name, "");
}

#[test]
fn test_split_blank_name() {
    assert!(PersonName::split("").is_none());
    assert!(PersonName::split("   ").is_none());
}

#[test]
fn test_join_skips_missing_parts() {
    assert_eq!(PersonName::join(Some("Juan"), Some("Pérez")), "Juan Pérez");
    assert_eq!(PersonName::join(Some("Juan"), None), "Juan");
    assert_eq!(PersonName::join(None, Some("Pérez")), "Pérez");
    assert_eq!(PersonName::join(None, None), "");
}
