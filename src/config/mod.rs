//! Layered YAML configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use justify::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".justify");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "render:\n  type: go\n").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.render.project_type.as_deref(), Some("go"));
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    load_config, load_config_value, load_from_paths, user_config_dir, ConfigPaths, CONFIG_DIR_ENV,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{JustifyConfig, RenderConfig};
