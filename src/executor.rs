//! # Sandboxed Filesystem Executor
//!
//! Performs extracted commands against the session workspace. Every path goes
//! through the sandbox before any filesystem access; each operation returns a
//! human-readable outcome string or a typed failure. Operations are awaited to
//! completion one at a time, so a batch never interleaves with itself.

use crate::error::FsError;
use crate::sandbox::Sandbox;
use crate::strings::messages;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

#[derive(Debug, Default)]
pub struct SandboxedFs {
    sandbox: Sandbox,
}

impl SandboxedFs {
    pub fn new() -> Self {
        Self {
            sandbox: Sandbox::new(),
        }
    }

    /// See [`Sandbox::set_root`].
    pub fn set_root(&mut self, candidate: &str) -> bool {
        self.sandbox.set_root(candidate)
    }

    pub fn root(&self) -> Option<&Path> {
        self.sandbox.root()
    }

    /// Creates a file (silently overwriting) or a directory tree. Parent
    /// directories are created as needed. Creating an already existing
    /// directory is reported, not an error.
    pub async fn create(
        &self,
        path: &str,
        content: &str,
        is_directory: bool,
    ) -> Result<String, FsError> {
        let target = self.sandbox.resolve(path)?;
        self.ensure_parent(&target).await?;

        if is_directory {
            if target.exists() {
                return Ok(messages::directory_exists(&target));
            }
            tokio::fs::create_dir_all(&target).await?;
            Ok(messages::directory_created(&target))
        } else {
            tokio::fs::write(&target, content).await?;
            Ok(messages::file_created(&target))
        }
    }

    /// Overwrites an existing file. The target must exist and not be a
    /// directory; create/modify intent is distinguished by the extractor only.
    pub async fn modify(&self, path: &str, content: &str) -> Result<String, FsError> {
        let target = self.sandbox.resolve(path)?;
        if !target.exists() {
            return Err(FsError::NotFound(target));
        }
        if target.is_dir() {
            return Err(std::io::Error::other(format!(
                "cannot modify a directory: {}",
                target.display()
            ))
            .into());
        }
        tokio::fs::write(&target, content).await?;
        Ok(messages::file_modified(&target))
    }

    /// Removes a file or a directory tree. A missing target yields a notice
    /// rather than an error.
    pub async fn delete(&self, path: &str) -> Result<String, FsError> {
        let target = self.sandbox.resolve(path)?;
        if !target.exists() {
            return Ok(messages::path_missing(&target));
        }
        if target.is_dir() {
            tokio::fs::remove_dir_all(&target).await?;
            Ok(messages::directory_deleted(&target))
        } else {
            tokio::fs::remove_file(&target).await?;
            Ok(messages::file_deleted(&target))
        }
    }

    /// Renames/relocates `source` to `dest`, creating destination parents.
    pub async fn rename(&self, source: &str, dest: &str) -> Result<String, FsError> {
        let src = self.sandbox.resolve(source)?;
        let dst = self.sandbox.resolve(dest)?;
        if !src.exists() {
            return Err(FsError::NotFound(src));
        }
        self.ensure_parent(&dst).await?;
        tokio::fs::rename(&src, &dst).await?;
        Ok(messages::moved(&src, &dst))
    }

    /// Duplicates a file or a whole directory tree to `dest`.
    pub async fn copy(&self, source: &str, dest: &str) -> Result<String, FsError> {
        let src = self.sandbox.resolve(source)?;
        let dst = self.sandbox.resolve(dest)?;
        if !src.exists() {
            return Err(FsError::NotFound(src));
        }
        self.ensure_parent(&dst).await?;
        if src.is_dir() {
            copy_tree(src, dst.clone()).await?;
            Ok(messages::directory_copied(&dst))
        } else {
            tokio::fs::copy(&src, &dst).await?;
            Ok(messages::file_copied(&dst))
        }
    }

    pub async fn read(&self, path: &str) -> Result<String, FsError> {
        let target = self.sandbox.resolve(path)?;
        if !target.exists() {
            return Err(FsError::NotFound(target));
        }
        Ok(tokio::fs::read_to_string(&target).await?)
    }

    /// Lists immediate children tagged `file` or `directory`, in the
    /// filesystem's native enumeration order.
    pub async fn list(&self, path: &str) -> Result<String, FsError> {
        let target = self.sandbox.resolve(path)?;
        if !target.exists() {
            return Err(FsError::NotFound(target));
        }
        if !target.is_dir() {
            return Err(std::io::Error::other(format!(
                "not a directory: {}",
                target.display()
            ))
            .into());
        }

        let mut entries = tokio::fs::read_dir(&target).await?;
        let mut listing = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let tag = if entry.file_type().await?.is_dir() {
                "directory"
            } else {
                "file"
            };
            listing.push(format!("{}: {}", tag, entry.file_name().to_string_lossy()));
        }
        Ok(listing.join("\n"))
    }

    /// Human-readable snapshot of the workspace: path and mtime.
    pub fn system_info(&self) -> String {
        match self.sandbox.root() {
            Some(root) => {
                let modified = std::fs::metadata(root)
                    .ok()
                    .and_then(|meta| meta.modified().ok())
                    .map(|time| {
                        chrono::DateTime::<chrono::Local>::from(time)
                            .format("%Y-%m-%d %H:%M:%S")
                            .to_string()
                    })
                    .unwrap_or_else(|| "unknown".to_string());
                messages::system_info(root, &modified)
            }
            None => messages::WORKSPACE_UNSET.to_string(),
        }
    }

    async fn ensure_parent(&self, target: &Path) -> Result<(), FsError> {
        if let Some(parent) = target.parent() {
            if !parent.exists() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }
}

/// Recursively duplicates a directory tree, preserving structure. Directories
/// recurse, files are copied leaf by leaf.
fn copy_tree(
    src: PathBuf,
    dst: PathBuf,
) -> Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>> {
    Box::pin(async move {
        tokio::fs::create_dir_all(&dst).await?;
        let mut entries = tokio::fs::read_dir(&src).await?;
        while let Some(entry) = entries.next_entry().await? {
            let from = entry.path();
            let to = dst.join(entry.file_name());
            if entry.file_type().await?.is_dir() {
                copy_tree(from, to).await?;
            } else {
                tokio::fs::copy(&from, &to).await?;
            }
        }
        Ok(())
    })
}
