use crate::{CoreError, LegacyUserRecord, Role, UnifiedUser, UserSource};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_stored_record_when_loaded_then_fields_match() {
    // Given
    let record = LegacyUserRecord::new("u1", "Juan Pérez", "juan@x.com", Role::Professional);
    let raw = record.to_json().unwrap();

    // When
    let loaded = LegacyUserRecord::from_json(&raw).unwrap();

    // Then
    assert_eq!(loaded, record);
}

#[test]
fn given_record_written_by_web_client_when_parsed_then_ok() {
    let raw = r#"{"id":"u7","name":"Ana","email":"ana@x.com","role":"admin"}"#;

    let record = LegacyUserRecord::from_json(raw).unwrap();

    assert_that!(record.role, eq(Role::Admin));
    assert_that!(record.name.as_str(), eq("Ana"));
}

#[test]
fn given_garbage_when_parsed_then_malformed_error() {
    let result = LegacyUserRecord::from_json("{not json");

    assert!(matches!(
        result,
        Err(CoreError::MalformedLegacyRecord { .. })
    ));
}

#[test]
fn given_unknown_role_when_parsed_then_patient() {
    let raw = r#"{"id":"u1","name":"A","email":"a@x.com","role":"doctor"}"#;

    let record = LegacyUserRecord::from_json(raw).unwrap();

    assert_that!(record.role, eq(Role::Patient));
}

#[test]
fn given_record_without_name_when_parsed_then_name_is_empty() {
    let raw = r#"{"id":"u1","email":"juan@x.com","role":"professional"}"#;

    let record = LegacyUserRecord::from_json(raw).unwrap();

    assert_that!(record.name.as_str(), eq(""));
    assert_that!(record.role, eq(Role::Professional));
}

#[test]
fn given_null_name_when_parsed_then_name_is_empty() {
    let raw = r#"{"id":"u1","name":null,"email":"juan@x.com","role":"admin"}"#;

    let record = LegacyUserRecord::from_json(raw).unwrap();

    assert_that!(record.name.as_str(), eq(""));
    assert_that!(record.email.as_str(), eq("juan@x.com"));
}

#[test]
fn given_numeric_id_when_parsed_then_id_is_stringified() {
    let raw = r#"{"id":1,"name":"Juan","email":"juan@x.com","role":"patient"}"#;

    let record = LegacyUserRecord::from_json(raw).unwrap();

    assert_that!(record.id.as_str(), eq("1"));
    assert_that!(record.name.as_str(), eq("Juan"));
}

#[test]
fn given_json_that_is_not_an_object_when_parsed_then_rejected() {
    for raw in [r#""u1""#, "42", "null", r#"["u1","Juan","juan@x.com","admin"]"#] {
        assert!(
            matches!(
                LegacyUserRecord::from_json(raw),
                Err(CoreError::NotAnObject { .. })
            ),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn given_record_when_unified_then_source_is_local_storage() {
    let record = LegacyUserRecord::new("u1", "Juan Pérez", "juan@x.com", Role::Professional);

    let user = UnifiedUser::from(&record);

    assert_that!(user.source, eq(UserSource::LocalStorage));
    assert_that!(user.id.as_str(), eq("u1"));
    assert_that!(user.email.as_str(), eq("juan@x.com"));
    assert_that!(user.role, eq(Role::Professional));
    assert!(user.phone.is_none());
    assert!(!user.verified);
}
