//! Manual command implementation.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Reference text for template authors.
pub const MANUAL: &str = r#"justify manual

OVERVIEW
  justify renders a Justfile from a template. Built-in templates for Rust,
  Go, C/C++ and Node are embedded in the binary; --template selects your own.
  Templates use Jinja syntax ({{ value }}, {% for %}, {% if %}).

TEMPLATE DATA
  cmake_dirs           list    CMake build directories to probe (first is -B)
  cpp_exe_candidates   list    executable names inside the CMake build dirs
  make_exe_candidates  list    root-level executables for Makefile builds
  go_exe_candidates    list    Go binary names to try
  node_entries         list    built Node entry files to try
  attach_on_dev        bool    print 'attach:node' when only a dev server exists
  cargo_bin_guess      string  fallback Cargo binary name

  Referencing any other name is an error.

CONFIGURATION
  Defaults for every render flag can be kept in YAML under a 'render:' key:
    <config dir>/justify/config.yml   user-wide
    .justify/config.yml               project
    .justify/config.local.yml         local, not committed
  Flags override config; later files override earlier ones.

TARGETS
  justify targets                 list targets (registry, else detection)
  justify targets --init          save detected targets to .justify/targets.json
  justify target add --name N --kind K --program P
  justify target set NAME         remember NAME for 'justify program'
  justify program [--target N]    print the program to launch

WORKFLOW
  1) Run 'justify' to write a Justfile
  2) 'just build' builds using the project's toolchain
  3) 'just program' prints the executable to run, or 'attach:node'
  4) 'justify editor --editor both' wires VS Code and Neovim to the targets

TIPS
  - Set JUSTIFY_TEMPLATE to use a team template everywhere
  - Use --print-template in CI to check that a template renders
"#;

/// The manual command implementation.
pub struct ManualCommand;

impl ManualCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ManualCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ManualCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.output(MANUAL);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, RenderOptions};
    use crate::ui::MockUI;

    #[test]
    fn prints_manual() {
        let mut ui = MockUI::new();
        ManualCommand::new().execute(&mut ui).unwrap();
        assert!(ui.output_text().starts_with("justify manual"));
    }

    #[test]
    fn documents_every_template_field() {
        let fields = serde_json::to_value(RenderOptions::default()).unwrap();
        for field in fields.as_object().unwrap().keys() {
            assert!(MANUAL.contains(field.as_str()), "undocumented field {}", field);
            assert!(render(&format!("{{{{ {} }}}}", field), &RenderOptions::default()).is_ok());
        }
    }
}
