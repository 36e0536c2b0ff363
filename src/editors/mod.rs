//! Editor debug/run configuration generators.
//!
//! Both generators take the target list as given (see
//! [`crate::targets::list`]) and never touch the registry.

pub mod neovim;
pub mod vscode;

use std::path::Path;

use crate::error::{JustifyError, Result};

pub use vscode::VsCodeFiles;

/// Fail with `AlreadyExists` on the first path that is already present.
///
/// Generators that write several files call this before writing any of
/// them, so a refused run leaves the tree untouched.
pub fn ensure_absent<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    match paths.iter().map(AsRef::as_ref).find(|p| p.exists()) {
        Some(path) => Err(JustifyError::AlreadyExists {
            path: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}
