//! # Configuration
//!
//! Accessmap configuration is managed by [`confique`], which layers a TOML
//! file, environment variables and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ACCESSMAP_DEFAULT_LOCALITY`,
//!    `ACCESSMAP_FAVORITES_PERSISTENCE`, `ACCESSMAP_DATA_DIR`.
//! 2. **Data dir config**: `<data dir>/accessmap.toml` when the data directory
//!    was given explicitly (`--data`).
//! 3. **User config**: `accessmap.toml` in the OS config directory (via the
//!    `directories` crate).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_locality` | `moscow` | Locality selected at startup |
//! | `favorites_persistence` | `eager` | `eager` writes on every toggle, `on_drop` at exit |
//! | `data_dir` | OS data dir | Where `storage.json` lives |

use crate::error::Result;
use crate::favorites::PersistMode;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "accessmap.toml";

/// Configuration for accessmap, stored in `accessmap.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessmapConfig {
    /// Locality id selected when a view starts.
    #[config(default = "moscow", env = "ACCESSMAP_DEFAULT_LOCALITY")]
    pub default_locality: String,

    /// When favorites reach storage: "eager" or "on_drop".
    #[config(default = "eager", env = "ACCESSMAP_FAVORITES_PERSISTENCE")]
    pub favorites_persistence: PersistMode,

    /// Directory holding `storage.json`. When absent, the OS data directory.
    #[config(env = "ACCESSMAP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for AccessmapConfig {
    fn default() -> Self {
        Self {
            default_locality: "moscow".to_string(),
            favorites_persistence: PersistMode::Eager,
            data_dir: None,
        }
    }
}

impl AccessmapConfig {
    /// Load from the environment and the given files, earlier files winning.
    /// Missing files are skipped.
    pub fn load(files: &[&Path]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(*file);
        }
        Ok(builder.load()?)
    }

    /// Like [`AccessmapConfig::load`], but never fails: a broken config file
    /// is logged and the defaults are used.
    pub fn load_or_default(files: &[&Path]) -> Self {
        Self::load(files).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid configuration, using defaults");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AccessmapConfig::default();
        assert_eq!(config.default_locality, "moscow");
        assert_eq!(config.favorites_persistence, PersistMode::Eager);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "default_locality = \"kazan\"\nfavorites_persistence = \"on_drop\"\n",
        )
        .unwrap();

        let config = AccessmapConfig::load(&[path.as_path()]).unwrap();
        assert_eq!(config.default_locality, "kazan");
        assert_eq!(config.favorites_persistence, PersistMode::OnDrop);
    }

    #[test]
    fn test_earlier_file_wins() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        fs::write(&first, "default_locality = \"spb\"\n").unwrap();
        let fallback = AccessmapConfig {
            default_locality: "ekb".to_string(),
            favorites_persistence: PersistMode::OnDrop,
            data_dir: None,
        };
        fs::write(&second, toml::to_string(&fallback).unwrap()).unwrap();

        let config = AccessmapConfig::load(&[first.as_path(), second.as_path()]).unwrap();
        assert_eq!(config.default_locality, "spb");
        assert_eq!(config.favorites_persistence, PersistMode::OnDrop);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let config = AccessmapConfig::load(&[missing.as_path()]).unwrap();
        assert_eq!(config.default_locality, "moscow");
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "favorites_persistence = \"sometimes\"\n").unwrap();

        assert!(AccessmapConfig::load(&[path.as_path()]).is_err());
        assert_eq!(
            AccessmapConfig::load_or_default(&[path.as_path()]),
            AccessmapConfig::default()
        );
    }
}
