//! justify - Justfile scaffolding and debug/run target registry.
//!
//! justify renders a Justfile for a Rust, Go, C/C++ or Node project from a
//! template, and keeps a small per-project registry of "targets" (named
//! programs an editor can launch or attach to).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Layered YAML configuration
//! - [`detection`] - Project type and target detection from marker files
//! - [`editors`] - VS Code and Neovim debug configuration generators
//! - [`error`] - Error types and result aliases
//! - [`render`] - Template rendering and built-in templates
//! - [`targets`] - Target registry, last-used marker and resolution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use justify::render::{render, split_clean, RenderOptions};
//!
//! let options = RenderOptions {
//!     go_exe_candidates: split_clean("server,cli"),
//!     ..Default::default()
//! };
//! let out = render("{% for b in go_exe_candidates %}{{ b }} {% endfor %}", &options).unwrap();
//! assert_eq!(out, "server cli ");
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod editors;
pub mod error;
pub mod render;
pub mod targets;
pub mod ui;

pub use error::{JustifyError, Result};
