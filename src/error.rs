//! # Error Types
//!
//! Typed failure taxonomy for sandboxed filesystem operations. Containment and
//! no-root failures are raised before any filesystem access; everything the OS
//! reports is carried through as `Io` with its cause.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    /// An operation was attempted before a workspace was configured.
    #[error("no working directory is set")]
    NoRoot,

    /// The resolved path falls outside the configured workspace.
    #[error("access outside of the working directory is not allowed: {0}")]
    Containment(String),

    /// A path the operation requires does not exist.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other filesystem failure (permissions, disk full, ...).
    #[error("filesystem operation failed: {0}")]
    Io(#[from] std::io::Error),
}
