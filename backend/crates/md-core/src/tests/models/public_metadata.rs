use crate::{MIGRATED_FROM_LOCAL_STORAGE, MetadataPatch, PublicMetadata, Role};

use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn given_unknown_keys_when_round_tripped_then_preserved() {
    let raw = json!({ "role": "admin", "clinicId": "c-42", "onboarded": true });

    let metadata: PublicMetadata = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(metadata.role, Some(Role::Admin));
    assert_eq!(metadata.extra.get("clinicId"), Some(&json!("c-42")));
    assert_eq!(serde_json::to_value(&metadata).unwrap(), raw);
}

#[test]
fn given_unrecognised_role_when_deserialized_then_role_absent() {
    let metadata: PublicMetadata =
        serde_json::from_value(json!({ "role": "superuser" })).unwrap();

    assert_eq!(metadata.role, None);
    assert_eq!(metadata.effective_role(), Role::Patient);
}

#[test]
fn given_non_string_role_when_deserialized_then_role_absent() {
    let metadata: PublicMetadata = serde_json::from_value(json!({ "role": 3 })).unwrap();

    assert_eq!(metadata.role, None);
}

#[test]
fn given_migration_patch_when_merged_then_patch_wins_and_extra_kept() {
    let current: PublicMetadata =
        serde_json::from_value(json!({ "role": "patient", "clinicId": "c-1" })).unwrap();
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let merged = current.merge(&MetadataPatch::migration(Role::Professional, at));

    assert_eq!(merged.role, Some(Role::Professional));
    assert_eq!(
        merged.migrated_from.as_deref(),
        Some(MIGRATED_FROM_LOCAL_STORAGE)
    );
    assert_eq!(merged.migration_date, Some(at));
    assert_eq!(merged.extra.get("clinicId"), Some(&json!("c-1")));
}

#[test]
fn given_empty_patch_when_merged_then_unchanged() {
    let current: PublicMetadata =
        serde_json::from_value(json!({ "role": "admin", "migratedFrom": "localStorage" }))
            .unwrap();

    let merged = current.merge(&MetadataPatch::default());

    assert_eq!(merged, current);
}

#[test]
fn given_migration_fields_when_serialized_then_camel_case_keys() {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let metadata = PublicMetadata::default().merge(&MetadataPatch::migration(Role::Admin, at));

    let value = serde_json::to_value(&metadata).unwrap();

    assert_eq!(value["migratedFrom"], json!("localStorage"));
    assert_eq!(value["migrationDate"], json!("2026-03-01T12:00:00Z"));
    assert!(metadata.records_migration_of(Role::Admin));
    assert!(!metadata.records_migration_of(Role::Patient));
}
