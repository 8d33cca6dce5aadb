pub mod legacy_user_record;
pub mod managed_identity;
pub mod person_name;
pub mod public_metadata;
pub mod role;
pub mod unified_user;
pub mod user_source;
