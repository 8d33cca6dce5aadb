use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Patient.as_str(), "patient");
    assert_eq!(Role::Professional.as_str(), "professional");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("patient").unwrap(), Role::Patient);
    assert_eq!(Role::from_str("professional").unwrap(), Role::Professional);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(matches!(
        Role::from_str("Admin"),
        Err(CoreError::InvalidRole { .. })
    ));
}

#[test]
fn test_role_default_is_patient() {
    assert_eq!(Role::default(), Role::Patient);
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Role::Professional).unwrap(),
        "\"professional\""
    );
}
