//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Running `justify` without a
//! subcommand renders a Justfile using the top-level [`RenderArgs`].

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::render::split_clean;
use crate::targets::{RequestMode, TargetKind};

/// justify - Justfile scaffolding and debug/run target registry.
#[derive(Debug, Parser)]
#[command(name = "justify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub render: RenderArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a Justfile (default if no command specified)
    Render(RenderArgs),

    /// List debug/run targets
    Targets(TargetsArgs),

    /// Print the program to launch
    Program(ProgramArgs),

    /// Select or declare targets
    Target(TargetArgs),

    /// Generate editor debug configurations
    Editor(EditorArgs),

    /// Show the template data reference and workflow
    Manual,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the version (same as --version)
    Version,
}

/// Arguments for rendering a Justfile.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RenderArgs {
    /// Output file (default: Justfile)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,

    /// Use a custom template instead of a built-in one
    #[arg(long, env = "JUSTIFY_TEMPLATE", value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Print the rendered template to stdout instead of writing a file
    #[arg(long)]
    pub print_template: bool,

    /// Project type: auto, rust, go, cpp or node
    #[arg(long = "type", value_name = "TYPE")]
    pub project_type: Option<String>,

    /// Comma-separated CMake build dirs (first is used by -B)
    #[arg(long, value_name = "LIST")]
    pub cmake_dirs: Option<String>,

    /// Comma-separated executable names inside CMake dirs
    #[arg(long, value_name = "LIST")]
    pub cpp_exes: Option<String>,

    /// Comma-separated root-level Makefile executables
    #[arg(long, value_name = "LIST")]
    pub make_exes: Option<String>,

    /// Comma-separated Go binary names to try
    #[arg(long, value_name = "LIST")]
    pub go_exes: Option<String>,

    /// Comma-separated Node build entry files
    #[arg(long, value_name = "LIST")]
    pub node_entries: Option<String>,

    /// Print attach:node when only a dev server is present
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub attach_on_dev: Option<bool>,

    /// Fallback cargo bin name (default: folder name)
    #[arg(long, value_name = "NAME")]
    pub cargo_bin: Option<String>,
}

impl RenderArgs {
    /// Flags as a config layer; unset flags stay unset.
    pub fn to_config(&self) -> RenderConfig {
        RenderConfig {
            project_type: self.project_type.clone(),
            output: self.output.clone(),
            template: self.template.clone(),
            cmake_dirs: self.cmake_dirs.as_deref().map(split_clean),
            cpp_exes: self.cpp_exes.as_deref().map(split_clean),
            make_exes: self.make_exes.as_deref().map(split_clean),
            go_exes: self.go_exes.as_deref().map(split_clean),
            node_entries: self.node_entries.as_deref().map(split_clean),
            attach_on_dev: self.attach_on_dev,
            cargo_bin: self.cargo_bin.clone(),
        }
    }
}

/// Arguments for the `targets` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetsArgs {
    /// Print targets as JSON
    #[arg(long)]
    pub json: bool,

    /// Persist detected targets to .justify/targets.json
    #[arg(long, conflicts_with_all = ["json", "schema"])]
    pub init: bool,

    /// Overwrite an existing registry (with --init)
    #[arg(long, requires = "init")]
    pub force: bool,

    /// Print the JSON Schema of the registry file
    #[arg(long, conflicts_with = "json")]
    pub schema: bool,
}

/// Arguments for the `program` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProgramArgs {
    /// Target to resolve (default: last used, else first)
    #[arg(long, value_name = "NAME")]
    pub target: Option<String>,
}

/// Arguments for the `target` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TargetArgs {
    #[command(subcommand)]
    pub action: TargetAction,
}

/// `target` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum TargetAction {
    /// Remember NAME as the last used target
    Set(TargetSetArgs),

    /// Add or replace a target in the registry
    Add(TargetAddArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct TargetSetArgs {
    /// Target name
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct TargetAddArgs {
    /// Unique target name
    #[arg(long)]
    pub name: String,

    /// rust, go, cpp or node
    #[arg(long)]
    pub kind: TargetKind,

    /// Program path, or attach:node
    #[arg(long)]
    pub program: String,

    /// Debugger port
    #[arg(long)]
    pub port: Option<u16>,

    /// launch or attach
    #[arg(long)]
    pub request: Option<RequestMode>,

    /// Working directory
    #[arg(long)]
    pub cwd: Option<String>,

    /// Program argument (repeatable)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Environment variable as KEY=VALUE (repeatable)
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,
}

/// Parse a `KEY=VALUE` pair. The value may itself contain `=`.
pub fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

/// Which editor configuration to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EditorKind {
    /// .vscode/tasks.json and .vscode/launch.json
    #[default]
    Vscode,
    /// .justify/dap.lua
    Neovim,
    /// The global Neovim client module
    NeovimGlobal,
    /// VS Code and Neovim project files
    Both,
}

/// Arguments for the `editor` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EditorArgs {
    /// Editor to generate for
    #[arg(long, value_enum, default_value_t = EditorKind::Vscode)]
    pub editor: EditorKind,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Output path for neovim-global ('-' for stdout)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
