use crate::AuthError;

use md_core::Role;

use serde::Serialize;
use thiserror::Error;

/// Provider call that failed during a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStep {
    UpdateName,
    UpdateMetadata,
}

impl std::fmt::Display for MigrationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpdateName => write!(f, "update_name"),
            Self::UpdateMetadata => write!(f, "update_metadata"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("No legacy user record to migrate")]
    NoLegacyData,

    #[error("Stored legacy user record was malformed and has been discarded")]
    MalformedLegacyData,

    #[error("Managed identity is not signed in")]
    NotSignedIn,

    #[error("A migration is already running")]
    InProgress,

    #[error("Identity provider rejected {step}: {source}")]
    UpdateRejected {
        step: MigrationStep,
        #[source]
        source: AuthError,
    },
}

impl MigrationError {
    /// Stable code for callers that only need to branch on the kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoLegacyData => "NO_LEGACY_DATA",
            Self::MalformedLegacyData => "MALFORMED_LEGACY_DATA",
            Self::NotSignedIn => "NOT_SIGNED_IN",
            Self::InProgress => "MIGRATION_IN_PROGRESS",
            Self::UpdateRejected { .. } => "UPDATE_REJECTED",
        }
    }

    /// Whether an immediate retry can succeed without other state changing
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UpdateRejected { .. } | Self::InProgress)
    }
}

/// Summary of a completed migration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub user_id: String,
    pub role: Role,
    pub name_updated: bool,
    pub metadata_updated: bool,
    /// Metadata already recorded this migration; only local data was cleared
    pub resumed: bool,
}
