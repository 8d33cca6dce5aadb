use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Identity provider error: {message} {location}")]
    Provider {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider has no signed-in user {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Legacy record error: {source}")]
    Core {
        #[from]
        source: md_core::CoreError,
    },
}

impl AuthError {
    /// Create a provider error
    #[track_caller]
    pub fn provider<S: Into<String>>(message: S) -> Self {
        AuthError::Provider {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        AuthError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a storage error
    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        AuthError::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuthError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
