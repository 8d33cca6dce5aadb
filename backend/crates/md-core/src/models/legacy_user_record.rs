//! User record written to local storage by the pre-Clerk login flow.

use crate::{CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Older web clients wrote numeric ids, left fields out or stored `null`;
/// any JSON object is accepted and missing pieces fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyUserRecord {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: String,
    /// Stored as entered, never validated
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub email: String,
    /// Unrecognised roles read as patient
    #[serde(default, deserialize_with = "deserialize_lenient_role")]
    pub role: Role,
}

impl LegacyUserRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Parse the serialized form kept in the storage slot. Only invalid JSON
    /// or a value that is not an object is rejected.
    #[track_caller]
    pub fn from_json(raw: &str) -> CoreErrorResult<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| CoreError::MalformedLegacyRecord {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !value.is_object() {
            return Err(CoreError::NotAnObject {
                found: json_kind(&value),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        serde_json::from_value(value).map_err(|e| CoreError::MalformedLegacyRecord {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn to_json(&self) -> CoreErrorResult<String> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

fn deserialize_lenient_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw
        .as_str()
        .and_then(|s| s.parse::<Role>().ok())
        .unwrap_or_default())
}
