//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status plus detection detail.
    Verbose,
    #[default]
    Normal,
    /// Only warnings, errors and data.
    Quiet,
}

impl OutputMode {
    /// Pick the mode for the global `-v` / `-q` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows status lines and notes.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows extra detail such as matched marker files.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
