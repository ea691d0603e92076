//! # Accessmap Architecture
//!
//! Accessmap is a **UI-agnostic directory of places annotated with
//! accessibility features**. It is a library that happens to have a CLI
//! client, not the other way round.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the accessmap CLI, or any other UI)                │
//! │  - Owns the AppState snapshot, renders CmdResults           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the two stores           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Filtering, lookups, wizard completion                    │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - catalog (static data), filter (pure), wizard (pure)      │
//! │  - favorites + preferences over a KeyValueBackend           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Side Effects
//!
//! The catalog is read-only, the filter engine and the wizard are pure
//! functions of their inputs. The favorites and text scale stores are the
//! only components that write anything, and they write only through the
//! injected [`store::KeyValueBackend`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`catalog`]: Static localities, places and comments
//! - [`filter`]: The place filter engine
//! - [`favorites`]: Favorites list and its store
//! - [`preferences`]: Text scale preference and its store
//! - [`wizard`]: Multi-step form state machine and the two concrete forms
//! - [`state`]: Immutable UI selection state
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: Domain types and their presentation metadata
//! - [`config`]: Configuration management
//! - [`init`]: Context bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod init;
pub mod model;
pub mod preferences;
pub mod state;
pub mod store;
pub mod wizard;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
