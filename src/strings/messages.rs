//! # Messages
//!
//! Constant strings and format functions for command outcomes and status
//! updates.

use std::path::Path;

pub const NO_WORKSPACE: &str = "⚠️ Set a working directory before executing commands.";
pub const NO_COMMANDS: &str = "🤖 No commands detected in the reply.";
pub const WORKSPACE_UNSET: &str = "⚠️ Working directory is not set.";

pub fn file_created(path: &Path) -> String {
    format!("✅ File created: {}", path.display())
}

pub fn directory_created(path: &Path) -> String {
    format!("✅ Directory created: {}", path.display())
}

pub fn directory_exists(path: &Path) -> String {
    format!("⚠️ Directory already exists: {}", path.display())
}

pub fn file_modified(path: &Path) -> String {
    format!("✏️ File modified: {}", path.display())
}

pub fn file_deleted(path: &Path) -> String {
    format!("🗑️ File deleted: {}", path.display())
}

pub fn directory_deleted(path: &Path) -> String {
    format!("🗑️ Directory deleted: {}", path.display())
}

pub fn path_missing(path: &Path) -> String {
    format!("⚠️ Path does not exist: {}", path.display())
}

pub fn moved(source: &Path, dest: &Path) -> String {
    format!("📁 Moved: {} → {}", source.display(), dest.display())
}

pub fn file_copied(dest: &Path) -> String {
    format!("📄 File copied to: {}", dest.display())
}

pub fn directory_copied(dest: &Path) -> String {
    format!("📂 Directory copied to: {}", dest.display())
}

pub fn command_failed(err: &str) -> String {
    format!("❌ {err}")
}

pub fn system_info(root: &Path, modified: &str) -> String {
    format!(
        "📌 Workspace: {}\n🕓 Last modified: {}",
        root.display(),
        modified
    )
}
