//! # Sandbox
//!
//! Path containment for the session workspace. Every path named by a command is
//! resolved against the configured root; anything that normalizes to a location
//! outside the root is rejected before it touches the filesystem.

use crate::error::FsError;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Default)]
pub struct Sandbox {
    root: Option<PathBuf>,
}

impl Sandbox {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Replaces the workspace root iff `candidate` is an existing directory.
    /// On rejection the previous root (if any) is kept untouched.
    pub fn set_root(&mut self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        // Canonicalize so the containment check compares like with like
        let resolved = match std::fs::canonicalize(candidate) {
            Ok(path) => path,
            Err(_) => return false,
        };
        if !resolved.is_dir() {
            return false;
        }
        self.root = Some(resolved);
        true
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Resolves a command path against the workspace root.
    ///
    /// The joined path is normalized lexically, so targets that do not exist
    /// yet can still be validated. Fails with `Containment` if the normalized
    /// path leaves the root, and with `NoRoot` if no workspace is configured.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, FsError> {
        let root = self.root.as_ref().ok_or(FsError::NoRoot)?;
        let target = normalize(&root.join(relative));
        // Component-wise: root `/a/b` must not accept sibling `/a/bc`.
        if target.starts_with(root) {
            Ok(target)
        } else {
            Err(FsError::Containment(relative.to_string()))
        }
    }
}

/// Collapses `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            other => resolved.push(other),
        }
    }
    resolved
}
