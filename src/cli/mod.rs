//! Command-line interface for justify.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, EditorArgs, EditorKind, ProgramArgs, RenderArgs, TargetArgs,
    TargetsArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
