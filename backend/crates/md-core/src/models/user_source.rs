use serde::{Deserialize, Serialize};

/// Backing source that produced a unified user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserSource {
    #[serde(rename = "clerk")]
    Clerk,
    #[serde(rename = "localStorage")]
    LocalStorage,
}

impl UserSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clerk => "clerk",
            Self::LocalStorage => "localStorage",
        }
    }
}
