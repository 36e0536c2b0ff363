//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands never print directly
//! - [`TerminalUI`] for styled output on a TTY
//! - [`NonInteractiveUI`] for pipes and CI
//! - [`MockUI`] for tests
//!
//! Status text (`success`) goes to stdout; diagnostics (`info`,
//! `warning`, `error`) go to stderr. `output` writes data verbatim to stdout
//! in every mode so it can be piped.
//!
//! # Example
//!
//! ```
//! use justify::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Wrote Justfile");
//! ui.output("target/debug/app\n");
//!
//! assert!(ui.has_success("Wrote Justfile"));
//! assert_eq!(ui.output_text(), "target/debug/app\n");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, JustifyTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a diagnostic note on stderr.
    fn info(&mut self, msg: &str);

    /// Display a warning message. Shown in every mode.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Write data to stdout exactly as given. Shown in every mode.
    fn output(&mut self, text: &str);
}
