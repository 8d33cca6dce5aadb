//! Wire shape of a Clerk Backend API user.

use md_core::{EmailAddress, ManagedIdentity, PhoneNumber, PublicMetadata};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ClerkUserDto {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    pub primary_email_address_id: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<ClerkEmailAddressDto>,
    #[serde(default)]
    pub phone_numbers: Vec<ClerkPhoneNumberDto>,
    #[serde(default)]
    pub public_metadata: PublicMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClerkEmailAddressDto {
    pub id: Option<String>,
    pub email_address: String,
    pub verification: Option<ClerkVerificationDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClerkVerificationDto {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClerkPhoneNumberDto {
    pub phone_number: String,
}

impl From<ClerkUserDto> for ManagedIdentity {
    /// The primary email address is moved to the front of the list
    fn from(dto: ClerkUserDto) -> Self {
        let mut emails = dto.email_addresses;
        if let Some(primary_id) = dto.primary_email_address_id.as_deref()
            && let Some(index) = emails
                .iter()
                .position(|email| email.id.as_deref() == Some(primary_id))
        {
            let primary = emails.remove(index);
            emails.insert(0, primary);
        }

        ManagedIdentity {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email_addresses: emails
                .into_iter()
                .map(|email| EmailAddress {
                    email_address: email.email_address,
                    verification_status: email.verification.and_then(|v| v.status),
                })
                .collect(),
            phone_numbers: dto
                .phone_numbers
                .into_iter()
                .map(|phone| PhoneNumber {
                    phone_number: phone.phone_number,
                })
                .collect(),
            image_url: dto.image_url,
            public_metadata: dto.public_metadata,
        }
    }
}
