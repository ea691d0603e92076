use super::backend::KeyValueBackend;
use crate::error::{AccessmapError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const STORAGE_FILE: &str = "storage.json";

/// File-backed storage: one JSON object of string values in `storage.json`.
///
/// Every write re-reads the file, updates the one key and writes the whole
/// object back through a temp file + rename, so a crash never leaves a
/// half-written store.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(STORAGE_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AccessmapError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(AccessmapError::Io)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(AccessmapError::Serialization)
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(values).map_err(AccessmapError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".storage-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(AccessmapError::Io)?;
        fs::rename(&tmp_file, self.storage_path()).map_err(AccessmapError::Io)?;

        tracing::debug!(path = %self.storage_path().display(), keys = values.len(), "storage written");
        Ok(())
    }
}

impl KeyValueBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut values = self.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "discarding unreadable storage file");
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}
