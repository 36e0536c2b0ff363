//! File-based detection helpers.
//!
//! Only existence is checked; marker file contents are never read.

use std::fs;
use std::path::Path;

/// Check if a file exists relative to project root.
pub fn file_exists(project_root: &Path, file: &str) -> bool {
    project_root.join(file).exists()
}

/// Return the first of `files` that exists.
pub fn any_file_exists(project_root: &Path, files: &[&str]) -> Option<String> {
    files
        .iter()
        .find(|f| project_root.join(f).exists())
        .map(|f| f.to_string())
}

/// Check whether any regular file directly under `dir` ends with `ext`.
///
/// Unreadable directories count as "no match".
pub fn has_file_with_extension(dir: &Path, ext: &str) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    entries.flatten().any(|entry| {
        entry.file_type().map(|t| !t.is_dir()).unwrap_or(false)
            && entry.file_name().to_string_lossy().ends_with(ext)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_exists_helper() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "").unwrap();

        assert!(file_exists(temp.path(), "Cargo.toml"));
        assert!(!file_exists(temp.path(), "go.mod"));
    }

    #[test]
    fn any_file_exists_returns_first_match() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Makefile"), "").unwrap();

        let found = any_file_exists(temp.path(), &["CMakeLists.txt", "Makefile"]);
        assert_eq!(found, Some("Makefile".to_string()));
    }

    #[test]
    fn extension_match_ignores_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("pkg.go")).unwrap();
        assert!(!has_file_with_extension(temp.path(), ".go"));

        fs::write(temp.path().join("main.go"), "package main").unwrap();
        assert!(has_file_with_extension(temp.path(), ".go"));
    }

    #[test]
    fn extension_match_on_missing_dir_is_false() {
        let temp = TempDir::new().unwrap();
        assert!(!has_file_with_extension(&temp.path().join("nope"), ".go"));
    }
}
