//! Typed view of the identity provider's `publicMetadata` document.
//!
//! Known keys are typed fields; anything else is carried in `extra` so a
//! round trip through [`PublicMetadata::merge`] never drops data written by
//! other parts of the application.

use crate::Role;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Marker written to `migratedFrom` when a legacy record is migrated
pub const MIGRATED_FROM_LOCAL_STORAGE: &str = "localStorage";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMetadata {
    /// Unrecognised role strings deserialize as `None`
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrated_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial update applied with [`PublicMetadata::merge`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataPatch {
    pub role: Option<Role>,
    pub migrated_from: Option<String>,
    pub migration_date: Option<DateTime<Utc>>,
    pub extra: Map<String, Value>,
}

impl MetadataPatch {
    /// Patch recording a completed local-storage migration
    pub fn migration(role: Role, migrated_at: DateTime<Utc>) -> Self {
        Self {
            role: Some(role),
            migrated_from: Some(MIGRATED_FROM_LOCAL_STORAGE.to_string()),
            migration_date: Some(migrated_at),
            extra: Map::new(),
        }
    }
}

impl PublicMetadata {
    /// Shallow merge: patch values win, `None` keeps the current value.
    /// Extra keys are unioned and the patch wins on collision.
    pub fn merge(&self, patch: &MetadataPatch) -> Self {
        let mut extra = self.extra.clone();
        for (key, value) in &patch.extra {
            extra.insert(key.clone(), value.clone());
        }

        Self {
            role: patch.role.or(self.role),
            migrated_from: patch
                .migrated_from
                .clone()
                .or_else(|| self.migrated_from.clone()),
            migration_date: patch.migration_date.or(self.migration_date),
            extra,
        }
    }

    /// Role with the application default applied
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or_default()
    }

    /// True when this metadata already records a local-storage migration
    /// for the given role
    pub fn records_migration_of(&self, role: Role) -> bool {
        self.migrated_from.as_deref() == Some(MIGRATED_FROM_LOCAL_STORAGE)
            && self.role == Some(role)
    }
}

fn deserialize_lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| Role::from_str(s).ok()))
}
