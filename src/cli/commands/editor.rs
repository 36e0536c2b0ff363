//! Editor command implementation.
//!
//! `justify editor` writes VS Code and/or Neovim debug configurations for
//! the listed targets, or installs the global Neovim client module.

use std::path::{Path, PathBuf};

use crate::cli::args::{EditorArgs, EditorKind};
use crate::editors::{ensure_absent, neovim, vscode, VsCodeFiles};
use crate::error::Result;
use crate::targets;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The editor command implementation.
pub struct EditorCommand {
    project_root: PathBuf,
    args: EditorArgs,
}

impl EditorCommand {
    pub fn new(project_root: &Path, args: EditorArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn args(&self) -> &EditorArgs {
        &self.args
    }

    fn install_client(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dest = match &self.args.out {
            Some(out) => Some(out.clone()),
            None => neovim::default_client_path(),
        };

        match dest {
            Some(path) if path.as_os_str() != "-" => {
                neovim::write_client(&path, self.args.force)?;
                ui.success(&format!("Wrote {}", path.display()));
            }
            _ => ui.output(neovim::client_source()?),
        }
        Ok(CommandResult::success())
    }
}

impl Command for EditorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (write_vscode, write_neovim, done) = match self.args.editor {
            EditorKind::NeovimGlobal => return self.install_client(ui),
            EditorKind::Vscode => (
                true,
                false,
                "Wrote .vscode/tasks.json and .vscode/launch.json",
            ),
            EditorKind::Neovim => (false, true, "Wrote .justify/dap.lua"),
            EditorKind::Both => (true, true, "Wrote VS Code + Neovim configs"),
        };

        let listed = targets::list(&self.project_root)?;
        if listed.is_empty() {
            ui.warning("No targets found; generated configurations will be empty");
        }

        if !self.args.force {
            let vscode_files = VsCodeFiles::for_root(&self.project_root);
            let dap = neovim::dap_path(&self.project_root);
            let mut planned = Vec::new();
            if write_vscode {
                planned.extend(vscode_files.paths());
            }
            if write_neovim {
                planned.push(dap.as_path());
            }
            ensure_absent(&planned)?;
        }

        if write_vscode {
            vscode::generate(&self.project_root, &listed, self.args.force)?;
        }
        if write_neovim {
            neovim::generate(&self.project_root, &listed, self.args.force)?;
        }
        ui.success(done);

        Ok(CommandResult::success())
    }
}
