//! Target synthesis from marker files.

use std::path::Path;

use super::file_detection::file_exists;
use super::project::ProjectType;
use crate::targets::{Target, TargetKind};

/// Fallback executable name when the root has no usable folder name.
const FALLBACK_BIN: &str = "app";

/// Markers that yield a target, in probe order.
const TARGET_MARKERS: [(&str, ProjectType); 4] = [
    ("Cargo.toml", ProjectType::Rust),
    ("go.mod", ProjectType::Go),
    ("package.json", ProjectType::Node),
    ("CMakeLists.txt", ProjectType::Cpp),
];

/// Synthesize one target per toolchain marker found at `root`.
///
/// Probe order is fixed (`Cargo.toml`, `go.mod`, `package.json`,
/// `CMakeLists.txt`) and determines the output order. Each target is named
/// `<type>-app`.
pub fn detect_all(root: &Path) -> Vec<Target> {
    let out: Vec<Target> = TARGET_MARKERS
        .iter()
        .filter(|(marker, _)| file_exists(root, marker))
        .map(|&(_, project_type)| {
            Target::new(
                format!("{}-app", project_type),
                TargetKind::from(project_type),
                default_program(root, project_type),
            )
        })
        .collect();

    tracing::debug!("detected {} target(s) in {}", out.len(), root.display());
    out
}

fn default_program(root: &Path, project_type: ProjectType) -> String {
    match project_type {
        ProjectType::Rust => display(&root.join("target").join("debug").join(folder_name(root))),
        ProjectType::Go => display(root),
        ProjectType::Node => display(&root.join("index.js")),
        ProjectType::Cpp => display(&root.join("build").join("app")),
    }
}

/// Name of the project folder, used as the default binary name.
///
/// Relative roots such as `.` are resolved first; falls back to `app`.
pub fn folder_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .and_then(|n| n.to_str())
        .map(String::from)
        .unwrap_or_else(|| FALLBACK_BIN.to_string())
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
