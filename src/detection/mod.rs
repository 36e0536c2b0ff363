//! Project and target detection.
//!
//! Detection looks only at which marker files exist at the project root.
//! It never fails: a missing marker just means nothing is reported for
//! that toolchain.

pub mod file_detection;
pub mod project;
pub mod targets;

pub use project::{
    detect_project_type, MarkerMatch, ProjectDetection, ProjectDetector, ProjectType,
};
pub use targets::{detect_all, folder_name};
