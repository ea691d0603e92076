//! # Context Bootstrap
//!
//! [`initialize`] resolves where accessmap keeps its files, loads the
//! configuration and builds a ready-to-use [`AccessmapApi`] over the
//! filesystem backend.
//!
//! ## Directory Resolution
//!
//! The data directory (holding `storage.json`) is, in order:
//! 1. the explicit `data_override` (the CLI's `--data`),
//! 2. the `data_dir` config key (or `ACCESSMAP_DATA_DIR`),
//! 3. the OS data directory from `directories::ProjectDirs`.
//!
//! Configuration is read from `<data_override>/accessmap.toml` (when an
//! override is given) and then from `accessmap.toml` in the OS config
//! directory, earlier sources winning.
//!
//! ## Default Locality
//!
//! A configured `default_locality` that the catalog does not know is logged
//! and replaced by the catalog's first locality.

use crate::api::AccessmapApi;
use crate::catalog::Catalog;
use crate::config::{AccessmapConfig, CONFIG_FILENAME};
use crate::error::{AccessmapError, Result};
use crate::preferences::ScaleTarget;
use crate::store::FsBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct AccessmapContext<T: ScaleTarget> {
    pub api: AccessmapApi<FsBackend, T>,
    pub config: AccessmapConfig,
    pub data_dir: PathBuf,
    /// The locality views start from, already checked against the catalog.
    pub locality: String,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "accessmap", "accessmap")
}

/// Config files to consult, highest priority first.
pub fn config_files(data_override: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(dir) = data_override {
        files.push(dir.join(CONFIG_FILENAME));
    }
    if let Some(dirs) = project_dirs() {
        files.push(dirs.config_dir().join(CONFIG_FILENAME));
    }
    files
}

pub fn resolve_data_dir(data_override: Option<&Path>, config: &AccessmapConfig) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AccessmapError::Storage("Could not determine data directory".to_string()))
}

/// Pick the startup locality: the configured one if the catalog knows it.
pub fn resolve_locality(catalog: &Catalog, configured: &str) -> String {
    if catalog.has_locality(configured) {
        return configured.to_string();
    }
    let fallback = catalog
        .default_locality()
        .map(|l| l.id.clone())
        .unwrap_or_default();
    tracing::warn!(configured, fallback = %fallback, "unknown default locality");
    fallback
}

pub fn initialize<T: ScaleTarget>(
    data_override: Option<PathBuf>,
    target: T,
) -> Result<AccessmapContext<T>> {
    let files = config_files(data_override.as_deref());
    let file_refs: Vec<&Path> = files.iter().map(PathBuf::as_path).collect();
    let config = AccessmapConfig::load_or_default(&file_refs);

    let data_dir = resolve_data_dir(data_override.as_deref(), &config)?;
    tracing::debug!(data_dir = %data_dir.display(), ?config, "accessmap initialized");

    let catalog = Catalog::builtin();
    let locality = resolve_locality(catalog, &config.default_locality);
    let api = AccessmapApi::new(
        FsBackend::new(&data_dir),
        catalog,
        config.favorites_persistence,
        target,
    );

    Ok(AccessmapContext {
        api,
        config,
        data_dir,
        locality,
    })
}
