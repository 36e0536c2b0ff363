//! Targets command implementation.
//!
//! `justify targets` lists, exports or initialises the target registry.

use std::path::{Path, PathBuf};

use crate::cli::args::TargetsArgs;
use crate::detection::detect_all;
use crate::error::{JustifyError, Result};
use crate::targets::{self, SchemaGenerator, Target, TargetsFile};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The targets command implementation.
pub struct TargetsCommand {
    project_root: PathBuf,
    args: TargetsArgs,
}

impl TargetsCommand {
    pub fn new(project_root: &Path, args: TargetsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn args(&self) -> &TargetsArgs {
        &self.args
    }

    fn init(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detected = detect_all(&self.project_root);
        if detected.is_empty() {
            ui.warning("No targets detected; writing an empty registry");
        }
        targets::save(
            &self.project_root,
            &TargetsFile::new(detected),
            self.args.force,
        )?;
        ui.success("Wrote .justify/targets.json");
        Ok(CommandResult::success())
    }
}

/// Format targets as aligned `name kind program` rows.
pub fn format_table(targets: &[Target]) -> String {
    targets
        .iter()
        .map(|t| format!("{:<16} {:<5} {}\n", t.name, t.kind, t.program))
        .collect()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(|e| JustifyError::Other(e.into()))?;
    out.push('\n');
    Ok(out)
}

impl Command for TargetsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            ui.output(&to_json(&SchemaGenerator::new().generate())?);
            return Ok(CommandResult::success());
        }

        if self.args.init {
            return self.init(ui);
        }

        let targets = targets::list(&self.project_root)?;

        if self.args.json {
            ui.output(&to_json(&targets)?);
        } else if targets.is_empty() {
            ui.info("No targets found (run 'justify target add' to declare one)");
        } else {
            ui.output(&format_table(&targets));
        }

        Ok(CommandResult::success())
    }
}
