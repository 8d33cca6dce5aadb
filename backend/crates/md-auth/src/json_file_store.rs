//! Key-value store persisted as a single JSON object on disk.
//!
//! Every operation reads the file, so edits made by another process between
//! calls are observed. Writes go to a sibling temp file and are renamed into
//! place. A file that does not parse reads as empty.

use crate::{AuthError, KeyValueStore, Result as AuthErrorResult};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> AuthErrorResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| AuthError::io(&self.path, e))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&contents) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(
                    "{} is not a JSON object of strings, treating it as empty; \
                     the next write replaces it: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> AuthErrorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| AuthError::io(parent, e))?;
        }

        let contents = serde_json::to_string_pretty(items)
            .map_err(|e| AuthError::storage(format!("Failed to serialize store: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, contents).map_err(|e| AuthError::io(&tmp_path, e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| AuthError::io(&self.path, e))?;

        debug!("Wrote {} item(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> AuthErrorResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> AuthErrorResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> AuthErrorResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_all()?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&items)
    }
}
