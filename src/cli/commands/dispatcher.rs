//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use super::render::RenderCommand;
use crate::cli::args::{Cli, Commands, RenderArgs, TargetAction};
use crate::config::ConfigPaths;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_paths: ConfigPaths,
}

impl CommandDispatcher {
    pub fn new(project_root: PathBuf) -> Self {
        let config_paths = ConfigPaths::discover(&project_root);
        Self {
            project_root,
            config_paths,
        }
    }

    /// Use these config files instead of the discovered ones.
    pub fn with_config_paths(mut self, config_paths: ConfigPaths) -> Self {
        self.config_paths = config_paths;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Route the CLI subcommand to its implementation and execute it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = &self.project_root;
        match &cli.command {
            Some(Commands::Render(args)) => self.render(args.clone()).execute(ui),
            Some(Commands::Targets(args)) => {
                super::targets::TargetsCommand::new(root, args.clone()).execute(ui)
            }
            Some(Commands::Program(args)) => {
                super::program::ProgramCommand::new(root, args.clone()).execute(ui)
            }
            Some(Commands::Target(args)) => match &args.action {
                TargetAction::Set(set) => {
                    super::target::TargetSetCommand::new(root, set.clone()).execute(ui)
                }
                TargetAction::Add(add) => {
                    super::target::TargetAddCommand::new(root, add.clone()).execute(ui)
                }
            },
            Some(Commands::Editor(args)) => {
                super::editor::EditorCommand::new(root, args.clone()).execute(ui)
            }
            Some(Commands::Manual) => super::manual::ManualCommand::new().execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Version) => super::version::VersionCommand.execute(ui),
            None => self.render(cli.render.clone()).execute(ui),
        }
    }

    fn render(&self, args: RenderArgs) -> RenderCommand {
        RenderCommand::new(&self.project_root, args).with_config_paths(self.config_paths.clone())
    }
}
