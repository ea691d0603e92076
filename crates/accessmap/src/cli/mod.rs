//! # CLI Behavior
//!
//! This is **one possible UI client** for accessmap, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes, and output formatting.
//!
//! ## Naked Execution
//!
//! Running `accessmap` with no arguments defaults to `accessmap list`: the
//! listing of the configured default locality.
//!
//! ## Selection State
//!
//! Each invocation builds one `AppState` snapshot from the persisted
//! favorites and the flags given (`--locality`, `--category`, `--access`),
//! then renders the view for it.
//!
//! ## Text Scale
//!
//! A terminal cannot change its font size, so the text scale preference
//! drives the column budget instead: larger text means fewer characters per
//! line before place names are truncated.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, logging, per-command handlers
//! - `render`: Output formatting (lists, details, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
