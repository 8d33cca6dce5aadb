use crate::backend_profile::ProfileEnvelope;

use md_core::{Role, UnifiedUser, UserSource};

use serde_json::json;

#[test]
fn given_wrapped_profile_when_parsed_then_data_is_extracted() {
    let envelope: ProfileEnvelope = serde_json::from_value(json!({
        "success": true,
        "data": {
            "id": "user_1",
            "name": "Ana López",
            "email": "ana@mail.com",
            "role": "admin",
            "verified": true
        }
    }))
    .unwrap();

    let ProfileEnvelope::Wrapped {
        success,
        data: Some(profile),
        ..
    } = envelope
    else {
        panic!("expected wrapped profile");
    };
    assert!(success);
    assert_eq!(profile.role, Role::Admin);
}

#[test]
fn given_bare_profile_when_converted_then_source_is_managed_identity() {
    let envelope: ProfileEnvelope = serde_json::from_value(json!({
        "id": "user_1",
        "name": "Ana López",
        "email": "ana@mail.com",
        "avatarUrl": "https://cdn/ana.png"
    }))
    .unwrap();

    let ProfileEnvelope::Bare(profile) = envelope else {
        panic!("expected bare profile");
    };
    let user = UnifiedUser::from(profile);

    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.avatar_url.as_deref(), Some("https://cdn/ana.png"));
    assert_eq!(user.source, UserSource::Clerk);
    assert!(!user.verified);
}
