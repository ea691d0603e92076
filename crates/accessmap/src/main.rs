//! # Accessmap CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/accessmap/src/cli/)                      │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering with colored (render.rs)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/accessmapapp/src/api.rs)                 │
//! │  - Owns the favorites and text scale stores                 │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI is responsible for
//! **all** user-facing concerns: argument parsing, context initialization,
//! dispatch, error reporting and rendering.
//!
//! ## Testing Approach
//!
//! - **Rendering (`src/cli/render.rs`)**: canned `CmdResult` parts rendered to
//!   strings and checked for content.
//! - **End to end (`tests/cli_e2e.rs`)**: the real binary against a temporary
//!   `--data` directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
