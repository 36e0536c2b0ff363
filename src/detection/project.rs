//! Project type detection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::file_detection::{any_file_exists, file_exists, has_file_with_extension};
use crate::targets::TargetKind;

/// Build ecosystem a Justfile template is chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Rust,
    Go,
    Cpp,
    Node,
}

impl ProjectType {
    /// All project types in detection priority order.
    pub const ALL: [ProjectType; 4] = [Self::Rust, Self::Go, Self::Cpp, Self::Node];

    /// Lowercase identifier used on the command line and in file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Cpp => "cpp",
            Self::Node => "node",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" => Ok(Self::Rust),
            "go" => Ok(Self::Go),
            "cpp" | "c++" => Ok(Self::Cpp),
            "node" => Ok(Self::Node),
            _ => Err(format!(
                "unknown project type '{}' (expected auto, rust, go, cpp or node)",
                s
            )),
        }
    }
}

impl From<ProjectType> for TargetKind {
    fn from(project_type: ProjectType) -> Self {
        match project_type {
            ProjectType::Rust => Self::Rust,
            ProjectType::Go => Self::Go,
            ProjectType::Cpp => Self::Cpp,
            ProjectType::Node => Self::Node,
        }
    }
}

/// A marker file and the project type it indicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    pub project_type: ProjectType,
    /// File name, or `*.go` for loose Go sources.
    pub marker: String,
}

/// Result of project detection.
#[derive(Debug, Clone, Default)]
pub struct ProjectDetection {
    /// One entry per matched type, in priority order.
    pub matches: Vec<MarkerMatch>,
}

impl ProjectDetection {
    /// Highest-priority type found, if any.
    pub fn primary_type(&self) -> Option<ProjectType> {
        self.matches.first().map(|m| m.project_type)
    }
}

/// Detects project types based on marker files.
pub struct ProjectDetector;

impl ProjectDetector {
    /// Detect all project types in a directory.
    ///
    /// Priority: rust > go > cpp > node.
    pub fn detect(project_root: &Path) -> ProjectDetection {
        let go_marker = if file_exists(project_root, "go.mod") {
            Some("go.mod".to_string())
        } else if has_file_with_extension(project_root, ".go") {
            Some("*.go".to_string())
        } else {
            None
        };

        let probes = [
            (
                ProjectType::Rust,
                any_file_exists(project_root, &["Cargo.toml"]),
            ),
            (ProjectType::Go, go_marker),
            (
                ProjectType::Cpp,
                any_file_exists(project_root, &["CMakeLists.txt", "Makefile"]),
            ),
            (
                ProjectType::Node,
                any_file_exists(project_root, &["package.json"]),
            ),
        ];

        let matches: Vec<MarkerMatch> = probes
            .into_iter()
            .filter_map(|(project_type, marker)| {
                marker.map(|marker| MarkerMatch {
                    project_type,
                    marker,
                })
            })
            .collect();

        for m in &matches {
            tracing::debug!("project marker {} -> {}", m.marker, m.project_type);
        }

        ProjectDetection { matches }
    }
}

/// Detect the highest-priority project type, if any marker is present.
pub fn detect_project_type(project_root: &Path) -> Option<ProjectType> {
    ProjectDetector::detect(project_root).primary_type()
}
