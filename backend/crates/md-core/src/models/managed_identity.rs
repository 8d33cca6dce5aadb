//! Snapshot of the user object owned by the managed identity provider.

use crate::{PersonName, PublicMetadata, UnifiedUser, UserSource};

use serde::{Deserialize, Serialize};

const VERIFIED_STATUS: &str = "verified";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedIdentity {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub public_metadata: PublicMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email_address: String,
    /// Provider verification status, e.g. "verified" or "unverified"
    pub verification_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub phone_number: String,
}

impl EmailAddress {
    pub fn is_verified(&self) -> bool {
        self.verification_status.as_deref() == Some(VERIFIED_STATUS)
    }
}

impl ManagedIdentity {
    /// First email address; the provider lists the primary one first
    pub fn primary_email(&self) -> Option<&EmailAddress> {
        self.email_addresses.first()
    }

    pub fn primary_phone(&self) -> Option<&str> {
        self.phone_numbers
            .first()
            .map(|phone| phone.phone_number.as_str())
    }

    pub fn full_name(&self) -> String {
        PersonName::join(self.first_name.as_deref(), self.last_name.as_deref())
    }

    /// Map into the unified view. Role falls back to patient and
    /// `verified` reflects the primary email only.
    pub fn to_unified_user(&self) -> UnifiedUser {
        let primary_email = self.primary_email();

        UnifiedUser {
            id: self.id.clone(),
            name: self.full_name(),
            email: primary_email
                .map(|email| email.email_address.clone())
                .unwrap_or_default(),
            phone: self.primary_phone().map(String::from),
            avatar_url: self.image_url.clone(),
            role: self.public_metadata.effective_role(),
            verified: primary_email.is_some_and(EmailAddress::is_verified),
            source: UserSource::Clerk,
        }
    }
}
