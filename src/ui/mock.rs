//! Mock UI implementation for testing.
//!
//! `MockUI` implements [`UserInterface`] and captures every call for later
//! assertion.

use super::{OutputMode, UserInterface};

/// Captures all UI interactions.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    successes: Vec<String>,
    infos: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    output: String,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Everything passed to `output`, concatenated.
    pub fn output_text(&self) -> &str {
        &self.output
    }

    /// Check if any success message contains `msg`.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn output(&mut self, text: &str) {
        self.output.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.success("s");
        ui.info("i");
        ui.warning("w");
        ui.error("e");

        assert!(ui.has_success("s"));
        assert!(ui.has_info("i"));
        assert!(ui.has_warning("w"));
        assert!(ui.has_error("e"));
    }

    #[test]
    fn output_is_concatenated() {
        let mut ui = MockUI::new();
        ui.output("a");
        ui.output("b\n");
        assert_eq!(ui.output_text(), "ab\n");
    }

    #[test]
    fn with_mode_sets_mode() {
        assert_eq!(MockUI::with_mode(OutputMode::Verbose).output_mode(), OutputMode::Verbose);
    }
}
