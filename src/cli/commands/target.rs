//! Target subcommands.
//!
//! - `justify target set NAME` records the last used target
//! - `justify target add ...` adds or replaces a registry entry

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::args::{TargetAddArgs, TargetSetArgs};
use crate::error::Result;
use crate::targets::{self, find_by_name, Target};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The `target set` implementation.
pub struct TargetSetCommand {
    project_root: PathBuf,
    args: TargetSetArgs,
}

impl TargetSetCommand {
    pub fn new(project_root: &Path, args: TargetSetArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for TargetSetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = &self.args.name;

        match targets::list(&self.project_root) {
            Ok(listed) if find_by_name(&listed, name).is_none() => {
                ui.warning(&format!("Target '{}' is not currently listed", name));
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("could not list targets: {}", e),
        }

        targets::write_last_used(&self.project_root, name)?;
        ui.success(&format!("Using target {}", name));
        Ok(CommandResult::success())
    }
}

/// The `target add` implementation.
pub struct TargetAddCommand {
    project_root: PathBuf,
    args: TargetAddArgs,
}

impl TargetAddCommand {
    pub fn new(project_root: &Path, args: TargetAddArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Build the target from the flags. Repeatable flags that were never
    /// given stay unset rather than becoming empty lists.
    pub fn target(&self) -> Target {
        let args = &self.args;
        let mut target = Target::new(&args.name, args.kind, &args.program);
        target.cwd = args.cwd.clone();
        target.request = args.request;
        target.port = args.port.filter(|p| *p != 0);
        if !args.args.is_empty() {
            target.args = Some(args.args.clone());
        }
        if !args.env.is_empty() {
            target.env = Some(args.env.iter().cloned().collect::<BTreeMap<_, _>>());
        }
        target
    }
}

impl Command for TargetAddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        targets::upsert(&self.project_root, self.target())?;
        ui.success(&format!(
            "Saved target {} to .justify/targets.json",
            self.args.name
        ));
        Ok(CommandResult::success())
    }
}
