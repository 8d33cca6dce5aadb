pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::legacy_user_record::LegacyUserRecord;
pub use models::managed_identity::{EmailAddress, ManagedIdentity, PhoneNumber};
pub use models::person_name::PersonName;
pub use models::public_metadata::{MIGRATED_FROM_LOCAL_STORAGE, MetadataPatch, PublicMetadata};
pub use models::role::Role;
pub use models::unified_user::UnifiedUser;
pub use models::user_source::UserSource;

#[cfg(test)]
mod tests;
