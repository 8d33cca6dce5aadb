use md_core::{LegacyUserRecord, MetadataPatch, PersonName, PublicMetadata};

use chrono::{DateTime, Utc};

/// Provider writes needed to move a legacy record into the managed identity.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationPlan {
    /// `None` when the legacy name is blank
    pub name: Option<PersonName>,
    pub metadata: PublicMetadata,
    /// Current metadata already records this migration
    pub already_applied: bool,
}

impl MigrationPlan {
    pub fn stage(
        record: &LegacyUserRecord,
        current: &PublicMetadata,
        migrated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: PersonName::split(&record.name),
            metadata: current.merge(&MetadataPatch::migration(record.role, migrated_at)),
            already_applied: current.records_migration_of(record.role),
        }
    }
}
