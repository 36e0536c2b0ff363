//! Program command implementation.
//!
//! `justify program` prints the executable an editor or Justfile should
//! launch, one line on stdout.

use std::path::{Path, PathBuf};

use crate::cli::args::ProgramArgs;
use crate::error::Result;
use crate::targets::resolve_program;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The program command implementation.
pub struct ProgramCommand {
    project_root: PathBuf,
    args: ProgramArgs,
}

impl ProgramCommand {
    pub fn new(project_root: &Path, args: ProgramArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for ProgramCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let program = resolve_program(&self.project_root, self.args.target.as_deref())?;
        ui.output(&format!("{}\n", program));
        Ok(CommandResult::success())
    }
}
