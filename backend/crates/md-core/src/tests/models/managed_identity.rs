use crate::{
    EmailAddress, ManagedIdentity, PhoneNumber, PublicMetadata, Role, UserSource,
};

fn identity(role: Option<Role>, status: Option<&str>) -> ManagedIdentity {
    ManagedIdentity {
        id: "user_2abc".to_string(),
        first_name: Some("Juan".to_string()),
        last_name: Some("Pérez".to_string()),
        email_addresses: vec![EmailAddress {
            email_address: "juan@x.com".to_string(),
            verification_status: status.map(String::from),
        }],
        phone_numbers: vec![PhoneNumber {
            phone_number: "+34600000000".to_string(),
        }],
        image_url: Some("https://img.example/juan.png".to_string()),
        public_metadata: PublicMetadata {
            role,
            ..PublicMetadata::default()
        },
    }
}

#[test]
fn test_unified_user_maps_managed_fields() {
    let user = identity(Some(Role::Admin), Some("verified")).to_unified_user();

    assert_eq!(user.id, "user_2abc");
    assert_eq!(user.name, "Juan Pérez");
    assert_eq!(user.email, "juan@x.com");
    assert_eq!(user.phone.as_deref(), Some("+34600000000"));
    assert_eq!(
        user.avatar_url.as_deref(),
        Some("https://img.example/juan.png")
    );
    assert_eq!(user.role, Role::Admin);
    assert!(user.verified);
    assert_eq!(user.source, UserSource::Clerk);
}

#[test]
fn test_missing_role_defaults_to_patient() {
    let user = identity(None, Some("verified")).to_unified_user();
    assert_eq!(user.role, Role::Patient);
}

#[test]
fn test_unverified_email_is_not_verified() {
    assert!(!identity(None, Some("unverified")).to_unified_user().verified);
    assert!(!identity(None, None).to_unified_user().verified);
}

#[test]
fn test_no_email_maps_to_empty_string() {
    let mut managed = identity(None, None);
    managed.email_addresses.clear();

    let user = managed.to_unified_user();

    assert_eq!(user.email, "");
    assert!(!user.verified);
}
