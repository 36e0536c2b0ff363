//! Error types for justify operations.
//!
//! This module defines [`JustifyError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Core operations (rendering, registry, resolution) return `JustifyError`
//!   and never print or exit
//! - `NotFound` is kept apart from other I/O errors so callers can fall back
//!   to defaults
//! - Use `anyhow::Error` (via `JustifyError::Other`) for CLI-boundary context

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for justify operations.
#[derive(Debug, Error)]
pub enum JustifyError {
    /// Template document has malformed expression syntax.
    #[error("Failed to parse template '{name}': {message}")]
    TemplateParse { name: String, message: String },

    /// Template referenced a field that the render options do not have.
    #[error("Failed to render template '{name}': {message}")]
    TemplateRender { name: String, message: String },

    /// Registry or state file is not valid JSON for its schema.
    #[error("Failed to parse {path}: {message}")]
    RegistryParse { path: PathBuf, message: String },

    /// Configuration file is not valid YAML for its schema.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A file the operation depends on does not exist.
    #[error("Not found: {path}")]
    NotFound { path: PathBuf },

    /// A destructive write was refused because the file exists.
    #[error("{path} already exists (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    /// No target with this name is listed.
    #[error("unknown target: {name}")]
    UnknownTarget { name: String },

    /// Neither the registry nor detection produced any target.
    #[error("no targets (run 'justify targets --init' or 'justify target add')")]
    NoTargets,

    /// No marker file identified the project type.
    #[error("unable to detect project type in {path} (use --type or --template)")]
    UndetectedProjectType { path: PathBuf },

    /// A command-line value could not be interpreted.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JustifyError {
    /// Map an I/O error on `path`, keeping "not found" distinguishable.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path: path.into() }
        } else {
            Self::Io(err)
        }
    }

    /// Whether this error means the file was simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for justify operations.
pub type Result<T> = std::result::Result<T, JustifyError>;
