use crate::{LegacyUserRecord, MetadataPatch, PersonName, PublicMetadata, Role};

use proptest::prelude::*;

fn any_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Patient), Just(Role::Professional), Just(Role::Admin)]
}

proptest! {
    #[test]
    fn given_token_names_when_split_then_first_token_and_rest(
        first in "[A-Za-zÁÉÍÓÚáéíóúñ]{1,12}",
        rest in proptest::collection::vec("[A-Za-zÁÉÍÓÚáéíóúñ]{1,12}", 0..4),
    ) {
        let full = std::iter::once(first.clone())
            .chain(rest.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        let name = PersonName::split(&full).unwrap();

        prop_assert_eq!(name.first_name, first);
        prop_assert_eq!(name.last_name, rest.join(" "));
    }

    #[test]
    fn given_any_record_when_stored_and_loaded_then_identical(
        id in "[a-z0-9_-]{1,24}",
        name in "\\PC{0,40}",
        email in "\\PC{0,40}",
        role in any_role(),
    ) {
        let record = LegacyUserRecord::new(id, name, email, role);

        let loaded = LegacyUserRecord::from_json(&record.to_json().unwrap()).unwrap();

        prop_assert_eq!(loaded, record);
    }

    #[test]
    fn given_role_patch_when_merged_then_role_replaced_and_extra_untouched(
        current in proptest::option::of(any_role()),
        patched in any_role(),
        key in "[a-z]{1,10}",
    ) {
        let mut metadata = PublicMetadata { role: current, ..PublicMetadata::default() };
        metadata.extra.insert(key.clone(), serde_json::Value::Bool(true));
        let patch = MetadataPatch { role: Some(patched), ..MetadataPatch::default() };

        let merged = metadata.merge(&patch);

        prop_assert_eq!(merged.role, Some(patched));
        prop_assert_eq!(merged.extra.get(&key), Some(&serde_json::Value::Bool(true)));
        prop_assert_eq!(merged.migrated_from, None);
    }
}
