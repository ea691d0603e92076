//! # Storage Layer
//!
//! Accessmap persists exactly two values, both as strings in a flat
//! key-value namespace:
//!
//! | Key          | Value                                  |
//! |--------------|----------------------------------------|
//! | `favorites`  | JSON array of place id strings         |
//! | `page-scale` | decimal integer percentage, e.g. `110` |
//!
//! The [`backend::KeyValueBackend`] trait abstracts where those strings live.
//! Stores above it ([`crate::favorites::FavoritesStore`],
//! [`crate::preferences::TextScaleStore`]) own the encoding and the recovery
//! rules; backends only move strings.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: a single `storage.json` object in the data
//!   directory, rewritten atomically on every write.
//! - [`mem_backend::MemBackend`]: a `RefCell<HashMap>` for tests, with write
//!   error simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── storage.json    # {"favorites": "[\"1\",\"7\"]", "page-scale": "110"}
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::KeyValueBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;

/// Key holding the JSON-encoded favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Key holding the text scale percentage.
pub const PAGE_SCALE_KEY: &str = "page-scale";
