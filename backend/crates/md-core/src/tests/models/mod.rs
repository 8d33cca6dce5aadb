mod legacy_user_record;
mod managed_identity;
mod person_name;
mod public_metadata;
mod role;
