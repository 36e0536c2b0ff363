//! Target listing and program resolution.

use std::path::Path;

use super::state::read_last_used;
use super::store;
use super::types::{find_by_name, Target};
use crate::detection::detect_all;
use crate::error::{JustifyError, Result};

/// List the targets for a project.
///
/// A persisted registry always wins over live detection, even when its
/// contents differ from what detection would produce.
pub fn list(root: &Path) -> Result<Vec<Target>> {
    match store::load(root) {
        Ok(file) => Ok(file.targets),
        Err(e) if e.is_not_found() => Ok(detect_all(root)),
        Err(e) => Err(e),
    }
}

/// Resolve the program to launch.
///
/// Precedence:
/// 1. an explicit, non-empty `name` (a miss is `UnknownTarget`)
/// 2. the last-used marker, if it names a listed target
/// 3. the first listed target
/// 4. otherwise `NoTargets`
///
/// A missing or unreadable last-used marker is treated as absent.
pub fn resolve_program(root: &Path, name: Option<&str>) -> Result<String> {
    resolve_target(root, name).map(|t| t.program)
}

/// Resolve the target to launch, using the same precedence as
/// [`resolve_program`].
pub fn resolve_target(root: &Path, name: Option<&str>) -> Result<Target> {
    let targets = list(root)?;

    if let Some(name) = name.filter(|n| !n.is_empty()) {
        return find_by_name(&targets, name)
            .cloned()
            .ok_or_else(|| JustifyError::UnknownTarget {
                name: name.to_string(),
            });
    }

    match read_last_used(root) {
        Ok(last) if !last.is_empty() => {
            if let Some(t) = find_by_name(&targets, &last) {
                tracing::debug!("resolved '{}' from last-used marker", t.name);
                return Ok(t.clone());
            }
            tracing::debug!("last-used target '{}' is no longer listed", last);
        }
        Ok(_) => {}
        Err(e) => tracing::debug!("ignoring last-used marker: {}", e),
    }

    targets.into_iter().next().ok_or(JustifyError::NoTargets)
}
