//! Registry persistence under `<root>/.justify/`.
//!
//! Files are read whole, modified in memory and written back whole. There
//! is no locking between processes; the last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::types::{Target, TargetsFile};
use crate::error::{JustifyError, Result};

/// Directory holding per-project justify state.
pub const JUSTIFY_DIR: &str = ".justify";

/// Get the state directory for a project.
pub fn justify_dir(root: &Path) -> PathBuf {
    root.join(JUSTIFY_DIR)
}

/// Get the registry file path.
pub fn targets_path(root: &Path) -> PathBuf {
    justify_dir(root).join("targets.json")
}

/// Load the persisted registry.
///
/// # Errors
///
/// Returns `NotFound` if no registry exists and `RegistryParse` if the file
/// is not a valid registry (including an unknown `kind` or `request`).
pub fn load(root: &Path) -> Result<TargetsFile> {
    let path = targets_path(root);
    let content = fs::read_to_string(&path).map_err(|e| JustifyError::from_io(&path, e))?;

    let mut file: TargetsFile =
        serde_json::from_str(&content).map_err(|e| JustifyError::RegistryParse {
            path: path.clone(),
            message: e.to_string(),
        })?;
    file.normalize();

    tracing::debug!(
        "loaded {} target(s) from {}",
        file.targets.len(),
        path.display()
    );
    Ok(file)
}

/// Save the registry.
///
/// Without `overwrite`, an existing registry is left untouched and
/// `AlreadyExists` is returned.
pub fn save(root: &Path, file: &TargetsFile, overwrite: bool) -> Result<()> {
    fs::create_dir_all(justify_dir(root))?;

    let path = targets_path(root);
    if !overwrite && path.exists() {
        return Err(JustifyError::AlreadyExists { path });
    }

    write_json(&path, file)
}

/// Insert or replace a target by name and persist the registry.
///
/// A missing registry starts empty at the current version; any other load
/// failure is returned unchanged.
pub fn upsert(root: &Path, target: Target) -> Result<()> {
    let mut file = match load(root) {
        Ok(file) => file,
        Err(e) if e.is_not_found() => TargetsFile::default(),
        Err(e) => return Err(e),
    };

    let name = target.name.clone();
    let replaced = file.upsert(target);
    tracing::debug!(
        "{} target '{}'",
        if replaced { "replaced" } else { "added" },
        name
    );

    save(root, &file, true)
}

/// Serialize `value` as pretty JSON and write it atomically.
///
/// Uses the write-to-temp-then-rename pattern so readers never observe a
/// partially written file.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content =
        serde_json::to_string_pretty(value).map_err(|e| JustifyError::Other(e.into()))?;
    content.push('\n');

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::{RequestMode, TargetKind};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn two_targets() -> TargetsFile {
        TargetsFile::new(vec![
            Target::new("a", TargetKind::Rust, "A"),
            Target::new("b", TargetKind::Go, "B"),
        ])
    }

    #[test]
    fn load_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load(temp.path()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut env = BTreeMap::new();
        env.insert("RUST_LOG".to_string(), "debug".to_string());
        let file = TargetsFile::new(vec![Target::new("srv", TargetKind::Node, "dist/index.js")
            .with_cwd("app")
            .with_args(vec!["--port".into(), "8080".into()])
            .with_env(env)
            .with_request(RequestMode::Attach)
            .with_port(9229)]);

        save(temp.path(), &file, false).unwrap();
        let loaded = load(temp.path()).unwrap();

        assert_eq!(loaded, file);
    }

    #[test]
    fn save_creates_directory_and_omits_unset_fields() {
        let temp = TempDir::new().unwrap();
        save(temp.path(), &two_targets(), false).unwrap();

        let content = fs::read_to_string(targets_path(temp.path())).unwrap();
        assert!(content.contains("\"version\": 1"));
        assert!(!content.contains("cwd"));
        assert!(!content.contains("null"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn save_without_overwrite_leaves_existing_file() {
        let temp = TempDir::new().unwrap();
        save(temp.path(), &two_targets(), false).unwrap();
        let before = fs::read(targets_path(temp.path())).unwrap();

        let err = save(temp.path(), &TargetsFile::default(), false).unwrap_err();

        assert!(matches!(err, JustifyError::AlreadyExists { .. }));
        assert_eq!(fs::read(targets_path(temp.path())).unwrap(), before);
    }

    #[test]
    fn save_with_overwrite_truncates() {
        let temp = TempDir::new().unwrap();
        save(temp.path(), &two_targets(), false).unwrap();

        save(temp.path(), &TargetsFile::default(), true).unwrap();

        assert!(load(temp.path()).unwrap().targets.is_empty());
    }

    #[test]
    fn load_normalizes_missing_version() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(justify_dir(temp.path())).unwrap();
        fs::write(
            targets_path(temp.path()),
            r#"{"targets":[{"name":"a","kind":"rust","program":"A"}]}"#,
        )
        .unwrap();

        assert_eq!(load(temp.path()).unwrap().version, 1);
    }

    #[test]
    fn load_invalid_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(justify_dir(temp.path())).unwrap();
        fs::write(targets_path(temp.path()), "{ not json").unwrap();

        let err = load(temp.path()).unwrap_err();
        assert!(matches!(err, JustifyError::RegistryParse { .. }));
    }

    #[test]
    fn upsert_creates_registry() {
        let temp = TempDir::new().unwrap();
        upsert(temp.path(), Target::new("a", TargetKind::Cpp, "build/app")).unwrap();

        let loaded = load(temp.path()).unwrap();
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.targets.len(), 1);
    }

    #[test]
    fn upsert_is_idempotent() {
        let temp = TempDir::new().unwrap();
        save(temp.path(), &two_targets(), false).unwrap();
        let target = Target::new("a", TargetKind::Rust, "A2");

        upsert(temp.path(), target.clone()).unwrap();
        upsert(temp.path(), target).unwrap();

        let loaded = load(temp.path()).unwrap();
        assert_eq!(loaded.targets.len(), 2);
        assert_eq!(loaded.targets[0].name, "a");
        assert_eq!(loaded.targets[0].program, "A2");
    }

    #[test]
    fn upsert_propagates_parse_errors() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(justify_dir(temp.path())).unwrap();
        fs::write(targets_path(temp.path()), "[]").unwrap();

        let err = upsert(temp.path(), Target::new("a", TargetKind::Go, ".")).unwrap_err();
        assert!(matches!(err, JustifyError::RegistryParse { .. }));
        assert_eq!(fs::read_to_string(targets_path(temp.path())).unwrap(), "[]");
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        save(temp.path(), &two_targets(), false).unwrap();

        let temp_path = targets_path(temp.path()).with_extension("json.tmp");
        assert!(!temp_path.exists());
    }
}
