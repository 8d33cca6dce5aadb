use error_location::ErrorLocation;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Malformed legacy user record: {source} {location}")]
    MalformedLegacyRecord {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Legacy user record must be a JSON object, found {found} {location}")]
    NotAnObject {
        found: &'static str,
        location: ErrorLocation,
    },

    #[error("Serialization error: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
