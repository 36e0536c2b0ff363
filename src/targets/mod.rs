//! Debug/run target registry.
//!
//! This module provides the per-project registry of named targets:
//! - [`types`]: the [`Target`] model and the registry file shape
//! - [`store`]: load, save and upsert of `.justify/targets.json`
//! - [`state`]: the last-used marker in `.justify/state.json`
//! - [`resolve`]: listing and "which program to launch" precedence
//! - [`schema`]: JSON Schema of the registry file
//!
//! # Example
//!
//! ```
//! use justify::targets::{resolve_program, upsert, Target, TargetKind};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! upsert(temp.path(), Target::new("api", TargetKind::Go, "./bin/api")).unwrap();
//! assert_eq!(resolve_program(temp.path(), None).unwrap(), "./bin/api");
//! ```

pub mod resolve;
pub mod schema;
pub mod state;
pub mod store;
pub mod types;

pub use resolve::{list, resolve_program, resolve_target};
pub use schema::SchemaGenerator;
pub use state::{read_last_used, state_path, write_last_used};
pub use store::{justify_dir, load, save, targets_path, upsert, JUSTIFY_DIR};
pub use types::{
    find_by_name, LastUsed, RequestMode, Target, TargetKind, TargetsFile, ATTACH_NODE_PROGRAM,
};
