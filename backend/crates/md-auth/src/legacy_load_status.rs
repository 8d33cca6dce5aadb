use serde::Serialize;

/// Outcome of reading the legacy slot at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyLoadStatus {
    /// `initialize()` has not run yet
    #[default]
    Pending,
    Absent,
    Loaded,
    /// Stored value did not parse and was removed
    Malformed,
    /// The store itself could not be read; treated as absent
    Unreadable,
}

impl LegacyLoadStatus {
    pub fn is_complete(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}
