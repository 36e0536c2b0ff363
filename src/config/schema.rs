//! Configuration schema for `.justify/config.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::render::{split_clean, RenderOptions};

/// Default CMake build directories, comma-separated.
pub const DEFAULT_CMAKE_DIRS: &str = "build,.build,cmake-build-debug";
/// Default executables looked up in CMake build directories.
pub const DEFAULT_CPP_EXES: &str = "app,main,Debug/app,Debug/main";
/// Default executables produced by a plain Makefile.
pub const DEFAULT_MAKE_EXES: &str = "app,main,a.out";
/// Default Go binary names.
pub const DEFAULT_GO_EXES: &str = "app,main";
/// Default built Node entry points.
pub const DEFAULT_NODE_ENTRIES: &str =
    "dist/index.js,dist/server/index.js,dist/server/entry.mjs,build/index.js,.next/standalone/server.js";
/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "Justfile";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JustifyConfig {
    /// Defaults for `justify render`.
    pub render: RenderConfig,
}

/// Render settings. Every field is optional; unset fields fall through to
/// the next layer and finally to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// `auto`, `rust`, `go`, `cpp` or `node`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Custom template file, relative to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmake_dirs: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpp_exes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_exes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_exes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_entries: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_on_dev: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo_bin: Option<String>,
}

impl RenderConfig {
    /// Layer `overlay` on top of `self`; fields set in `overlay` win.
    pub fn overlay(self, overlay: RenderConfig) -> RenderConfig {
        RenderConfig {
            project_type: overlay.project_type.or(self.project_type),
            output: overlay.output.or(self.output),
            template: overlay.template.or(self.template),
            cmake_dirs: overlay.cmake_dirs.or(self.cmake_dirs),
            cpp_exes: overlay.cpp_exes.or(self.cpp_exes),
            make_exes: overlay.make_exes.or(self.make_exes),
            go_exes: overlay.go_exes.or(self.go_exes),
            node_entries: overlay.node_entries.or(self.node_entries),
            attach_on_dev: overlay.attach_on_dev.or(self.attach_on_dev),
            cargo_bin: overlay.cargo_bin.or(self.cargo_bin),
        }
    }

    /// Output path, defaulting to `Justfile`.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Build template data, filling unset fields with the built-in defaults.
    ///
    /// `cargo_bin_default` is used when no Cargo binary name is configured;
    /// callers pass the project folder name.
    pub fn to_options(&self, cargo_bin_default: &str) -> RenderOptions {
        fn list(value: &Option<Vec<String>>, default: &str) -> Vec<String> {
            match value {
                Some(items) => items
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
                None => split_clean(default),
            }
        }

        RenderOptions {
            cmake_dirs: list(&self.cmake_dirs, DEFAULT_CMAKE_DIRS),
            cpp_exe_candidates: list(&self.cpp_exes, DEFAULT_CPP_EXES),
            make_exe_candidates: list(&self.make_exes, DEFAULT_MAKE_EXES),
            go_exe_candidates: list(&self.go_exes, DEFAULT_GO_EXES),
            node_entries: list(&self.node_entries, DEFAULT_NODE_ENTRIES),
            attach_on_dev: self.attach_on_dev.unwrap_or(true),
            cargo_bin_guess: self
                .cargo_bin
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| cargo_bin_default.to_string()),
        }
    }
}
