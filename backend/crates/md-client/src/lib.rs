//! HTTP collaborators of the identity reconciler: the Clerk Backend API
//! (managed identity) and the Mundoctor backend profile API.

pub mod backend_profile;
pub mod clerk_client;
pub mod clerk_identity;
pub mod clerk_user_dto;
pub mod error;
pub mod profile_client;

pub use backend_profile::BackendProfile;
pub use clerk_client::ClerkClient;
pub use clerk_identity::ClerkIdentity;
pub use clerk_user_dto::ClerkUserDto;
pub use error::{ClientError, Result as ClientResult};
pub use profile_client::ProfileClient;

#[cfg(test)]
mod tests;
