//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands report through
//! [`crate::ui::UserInterface`] and never exit the process.

pub mod completions;
pub mod dispatcher;
pub mod editor;
pub mod manual;
pub mod program;
pub mod render;
pub mod target;
pub mod targets;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
