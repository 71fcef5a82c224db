//! # Command Processor
//!
//! Session facade tying the extractor and the executor together. One processor
//! owns one workspace; callers create one per session, so sandbox roots are
//! never shared mutable state between sessions.

use crate::command::Command;
use crate::error::FsError;
use crate::executor::SandboxedFs;
use crate::extractor;
use crate::strings::messages;
use std::path::Path;

#[derive(Debug, Default)]
pub struct CommandProcessor {
    fs: SandboxedFs,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self {
            fs: SandboxedFs::new(),
        }
    }

    /// Points the session at a new workspace. Returns whether the candidate
    /// was accepted; on rejection any previously configured workspace is kept.
    pub fn set_working_directory(&mut self, path: &str) -> bool {
        let accepted = self.fs.set_root(path);
        if accepted {
            tracing::info!("Workspace set to {path}");
        } else {
            tracing::warn!("Rejected workspace candidate: {path}");
        }
        accepted
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.fs.root()
    }

    pub fn system_info(&self) -> String {
        self.fs.system_info()
    }

    /// Extracts commands from a model reply and executes them in order,
    /// joining per-command outcomes with blank lines. A failing command is
    /// reported in place and does not stop the rest of the batch.
    pub async fn process(&self, reply: &str) -> String {
        if self.fs.root().is_none() {
            return messages::NO_WORKSPACE.to_string();
        }

        let commands = extractor::extract(reply);
        if commands.is_empty() {
            return messages::NO_COMMANDS.to_string();
        }
        tracing::debug!("Extracted {} command(s) from reply", commands.len());

        let mut outcomes = Vec::with_capacity(commands.len());
        for command in &commands {
            tracing::debug!("Executing {command:?}");
            outcomes.push(match self.execute(command).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    tracing::warn!("Command failed: {err}");
                    messages::command_failed(&err.to_string())
                }
            });
        }
        outcomes.join("\n\n")
    }

    async fn execute(&self, command: &Command) -> Result<String, FsError> {
        match command {
            Command::CreateFile(path, content) => self.fs.create(path, content, false).await,
            Command::CreateDirectory(path) => self.fs.create(path, "", true).await,
            Command::Modify(path, content) => self.fs.modify(path, content).await,
            Command::Delete(path) => self.fs.delete(path).await,
            Command::Move(source, dest) => self.fs.rename(source, dest).await,
            Command::Copy(source, dest) => self.fs.copy(source, dest).await,
            Command::Read(path) => self.fs.read(path).await,
            Command::List(path) => self.fs.list(path).await,
        }
    }
}
