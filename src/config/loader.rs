//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_configs;
use crate::config::schema::JustifyConfig;
use crate::error::{JustifyError, Result};
use crate::targets::justify_dir;

/// Config files in merge order (later overrides earlier).
///
/// 1. User global config (`<config dir>/justify/config.yml`)
/// 2. Project config (`.justify/config.yml`)
/// 3. Local overrides (`.justify/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub user_global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover existing config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: user_config_dir()
                .map(|d| d.join("config.yml"))
                .filter(|p| p.is_file()),
            ..Self::project_only(project_root)
        }
    }

    /// Discover the project's own config files, skipping the user global one.
    pub fn project_only(project_root: &Path) -> Self {
        let dir = justify_dir(project_root);
        Self {
            user_global: None,
            project: Some(dir.join("config.yml")).filter(|p| p.is_file()),
            project_local: Some(dir.join("config.local.yml")).filter(|p| p.is_file()),
        }
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Environment variable that replaces the per-user config directory.
pub const CONFIG_DIR_ENV: &str = "JUSTIFY_CONFIG_DIR";

/// Per-user justify configuration directory.
///
/// `JUSTIFY_CONFIG_DIR` wins when set and non-empty; otherwise
/// `<config dir>/justify`.
pub fn user_config_dir() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::config_dir().map(|d| d.join("justify")),
    }
}

/// Load a config file as a raw YAML value.
///
/// An empty document loads as `null`.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| JustifyError::from_io(path, e))?;

    serde_yaml::from_str(&content).map_err(|e| JustifyError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the given config files.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<JustifyConfig> {
    let mut layers = Vec::new();
    let mut last = None;

    for path in paths.all_existing() {
        let value = load_config_value(path)?;
        tracing::debug!("loaded config layer {}", path.display());
        if !value.is_null() {
            layers.push(value);
        }
        last = Some(path);
    }

    let Some(last) = last else {
        return Ok(JustifyConfig::default());
    };

    serde_yaml::from_value(merge_configs(&layers)).map_err(|e| JustifyError::ConfigParse {
        path: last.clone(),
        message: format!("invalid merged config: {}", e),
    })
}

/// Discover, load and merge all config files for a project.
///
/// Missing files are skipped; no config at all yields the defaults.
pub fn load_config(project_root: &Path) -> Result<JustifyConfig> {
    load_from_paths(&ConfigPaths::discover(project_root))
}
