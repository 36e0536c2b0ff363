//! Last-used target marker (`.justify/state.json`).

use std::fs;
use std::path::{Path, PathBuf};

use super::store::{justify_dir, write_json};
use super::types::LastUsed;
use crate::error::{JustifyError, Result};

/// Get the state file path.
pub fn state_path(root: &Path) -> PathBuf {
    justify_dir(root).join("state.json")
}

/// Read the name of the last selected target.
///
/// # Errors
///
/// Returns `NotFound` when no marker was ever written.
pub fn read_last_used(root: &Path) -> Result<String> {
    let path = state_path(root);
    let content = fs::read_to_string(&path).map_err(|e| JustifyError::from_io(&path, e))?;

    let state: LastUsed =
        serde_json::from_str(&content).map_err(|e| JustifyError::RegistryParse {
            path,
            message: e.to_string(),
        })?;
    Ok(state.last_used)
}

/// Record `name` as the last selected target, replacing any previous marker.
pub fn write_last_used(root: &Path, name: &str) -> Result<()> {
    fs::create_dir_all(justify_dir(root))?;
    write_json(
        &state_path(root),
        &LastUsed {
            last_used: name.to_string(),
        },
    )
}
