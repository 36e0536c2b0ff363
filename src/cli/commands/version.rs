//! Version command implementation.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints `justify <version>`, the same line as `--version`.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.output(&format!("justify {}\n", env!("CARGO_PKG_VERSION")));
        Ok(CommandResult::success())
    }
}
