//! JSON file storage for the persisted skill order.
//!
//! One key maps to one file (`<root>/<key>.json`) holding a JSON array of
//! skill ids, order-significant, no duplicates. A missing, empty, or
//! malformed value is reported as absent so the caller can reseed from the
//! fallback list instead of failing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, SbError};

pub struct OrderStore {
    root: PathBuf,
}

impl OrderStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load the persisted order for `key`, or `None` when absent.
    ///
    /// A corrupted entry (invalid JSON, non-array, non-string elements) is
    /// treated as absent, not as an error.
    pub fn load(&self, key: &str) -> Result<Option<Vec<String>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(order) => Ok(Some(order)),
            Err(err) => {
                warn!(
                    target: "storage",
                    key,
                    %err,
                    "persisted order is malformed; treating as absent"
                );
                Ok(None)
            }
        }
    }

    /// Persist `order` under `key`, creating the root directory if needed.
    pub fn save(&self, key: &str, order: &[String]) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let payload = serde_json::to_string_pretty(order)
            .map_err(|err| SbError::Serialization(format!("order serialize: {err}")))?;
        fs::write(self.path_for(key), payload)?;
        Ok(())
    }

    /// Whether a value exists for `key`, malformed or not.
    pub fn exists(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    /// Remove the value for `key`. Returns whether anything was deleted.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_none() {
        let dir = tempdir().unwrap();
        let store = OrderStore::new(dir.path());
        assert!(store.load("skills-order").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = OrderStore::new(dir.path());
        let order = vec!["Go".to_string(), "Rust".to_string()];
        store.save("skills-order", &order).unwrap();
        assert_eq!(store.load("skills-order").unwrap(), Some(order));
    }

    #[test]
    fn test_save_creates_root() {
        let dir = tempdir().unwrap();
        let store = OrderStore::new(dir.path().join("nested/sb"));
        store.save("skills-order", &["Go".to_string()]).unwrap();
        assert!(store.exists("skills-order"));
    }

    #[test]
    fn test_load_malformed_json_returns_none() {
        let dir = tempdir().unwrap();
        let store = OrderStore::new(dir.path());
        fs::write(store.path_for("skills-order"), "{not json").unwrap();
        assert!(store.load("skills-order").unwrap().is_none());
    }

    #[test]
    fn test_load_non_array_returns_none() {
        let dir = tempdir().unwrap();
        let store = OrderStore::new(dir.path());
        fs::write(store.path_for("skills-order"), r#"{"skills": []}"#).unwrap();
        assert!(store.load("skills-order").unwrap().is_none());
    }

    #[test]
    fn test_load_empty_file_returns_none() {
        let dir = tempdir().unwrap();
        let store = OrderStore::new(dir.path());
        fs::write(store.path_for("skills-order"), "  \n").unwrap();
        assert!(store.load("skills-order").unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let store = OrderStore::new(dir.path());
        store.save("skills-order", &["Go".to_string()]).unwrap();
        store.save("skills-order", &["Rust".to_string()]).unwrap();
        assert_eq!(
            store.load("skills-order").unwrap(),
            Some(vec!["Rust".to_string()])
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempdir().unwrap();
        let store = OrderStore::new(dir.path());
        store.save("a", &["Go".to_string()]).unwrap();
        store.save("b", &["Rust".to_string()]).unwrap();
        assert_eq!(store.load("a").unwrap(), Some(vec!["Go".to_string()]));
        assert_eq!(store.load("b").unwrap(), Some(vec!["Rust".to_string()]));
    }

    #[test]
    fn test_remove_deletes_value() {
        let dir = tempdir().unwrap();
        let store = OrderStore::new(dir.path());
        store.save("skills-order", &["Go".to_string()]).unwrap();
        assert!(store.remove("skills-order").unwrap());
        assert!(!store.remove("skills-order").unwrap());
        assert!(store.load("skills-order").unwrap().is_none());
    }
}
