use crate::Result as AuthErrorResult;

/// String key-value storage holding the legacy user slot.
///
/// Removing a missing key must succeed as a no-op.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> AuthErrorResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> AuthErrorResult<()>;

    fn remove_item(&self, key: &str) -> AuthErrorResult<()>;
}
