//! Visual theme and styling.

use console::Style;

/// Styles applied by [`super::TerminalUI`].
#[derive(Debug, Clone)]
pub struct JustifyTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Diagnostic notes such as the detected project type.
    pub info: Style,
}

impl Default for JustifyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl JustifyTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(msg))
    }
}

/// Check if colors should be used.
///
/// Honours `NO_COLOR` (https://no-color.org/) and requires stdout to be a
/// terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}
