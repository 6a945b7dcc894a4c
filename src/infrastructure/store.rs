//! Key-value storage port
//!
//! The entry store is written against this small port rather than the
//! filesystem directly, so tests can inject an in-memory double and the
//! persistence backend can be swapped without touching the domain.

use crate::error::{MoodlogError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Minimal string key-value persistence port
pub trait KeyValueStore {
    /// Read the value for a key; `None` when the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any prior value for the key
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; succeeds when the key does not exist
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed store: one `<key>.json` file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MoodlogError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);

        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| {
                MoodlogError::Storage(format!(
                    "Failed to create {}: {}",
                    self.root.display(),
                    e
                ))
            })?;
        }

        // Best-effort atomic replace: write a sibling temp file, then
        // rename into place so readers never see a half-written value.
        let tmp_path = self.root.join(format!(".{}.json.tmp", key));
        fs::write(&tmp_path, value).map_err(|e| {
            MoodlogError::Storage(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            MoodlogError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MoodlogError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-memory store for tests; can be switched into a failing mode to
/// exercise storage-error paths
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
    fail: RefCell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation return a storage error
    pub fn poison(&self) {
        *self.fail.borrow_mut() = true;
    }

    fn check(&self) -> Result<()> {
        if *self.fail.borrow() {
            Err(MoodlogError::Storage("memory store poisoned".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
