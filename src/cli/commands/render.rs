//! Render command implementation.
//!
//! `justify` / `justify render` writes a Justfile from a built-in or custom
//! template.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::RenderArgs;
use crate::config::{load_config, load_from_paths, ConfigPaths, RenderConfig};
use crate::detection::{folder_name, ProjectDetector, ProjectType};
use crate::error::{JustifyError, Result};
use crate::render::{builtin, render, write_rendered};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The render command implementation.
pub struct RenderCommand {
    project_root: PathBuf,
    args: RenderArgs,
    config_paths: Option<ConfigPaths>,
}

impl RenderCommand {
    pub fn new(project_root: &Path, args: RenderArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config_paths: None,
        }
    }

    /// Read these config files instead of discovering them.
    pub fn with_config_paths(mut self, config_paths: ConfigPaths) -> Self {
        self.config_paths = Some(config_paths);
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn args(&self) -> &RenderArgs {
        &self.args
    }

    /// Merge config files with the command-line flags (flags win).
    fn settings(&self) -> Result<RenderConfig> {
        let config = match &self.config_paths {
            Some(paths) => load_from_paths(paths)?,
            None => load_config(&self.project_root)?,
        };
        Ok(config.render.overlay(self.args.to_config()))
    }

    /// Load the template text: a custom file if given, else the built-in
    /// for the requested or detected project type.
    fn template_source(
        &self,
        settings: &RenderConfig,
        ui: &mut dyn UserInterface,
    ) -> Result<String> {
        if let Some(path) = &settings.template {
            let path = self.resolve(path);
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read template {}", path.display()))?;
            return Ok(source);
        }

        let project_type = match settings.project_type.as_deref() {
            None | Some("auto") | Some("") => {
                let detection = ProjectDetector::detect(&self.project_root);
                if ui.output_mode().shows_detail() {
                    for m in &detection.matches {
                        ui.info(&format!("Found {} ({})", m.marker, m.project_type));
                    }
                }
                let detected = detection.primary_type().ok_or_else(|| {
                    JustifyError::UndetectedProjectType {
                        path: self.project_root.clone(),
                    }
                })?;
                ui.info(&format!("Detected project type: {}", detected));
                detected
            }
            Some(name) => name
                .parse::<ProjectType>()
                .map_err(|message| JustifyError::InvalidArgument { message })?,
        };

        Ok(builtin::justfile_template(project_type)?.to_string())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.settings()?;
        let source = self.template_source(&settings, ui)?;
        let options = settings.to_options(&folder_name(&self.project_root));
        let rendered = render(&source, &options)?;

        if self.args.print_template {
            ui.output(&rendered);
            return Ok(CommandResult::success());
        }

        let output = settings.output_path();
        let dst = self.resolve(&output);
        match write_rendered(&dst, &rendered, self.args.force) {
            Ok(()) => {
                ui.success(&format!("Wrote {}", output.display()));
                Ok(CommandResult::success())
            }
            Err(JustifyError::AlreadyExists { .. }) => {
                ui.error(&format!(
                    "Refusing to overwrite {} (use --force to override)",
                    output.display()
                ));
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
