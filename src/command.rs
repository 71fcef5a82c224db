//! # Command Types
//!
//! The typed filesystem instructions extracted from a model reply. A command is
//! pure data: every path stays relative to the session workspace and is only
//! resolved when the executor runs it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Command {
    CreateFile(String, String), // path, content
    CreateDirectory(String),    // path
    Modify(String, String),     // path, new content
    Delete(String),             // path
    Move(String, String),       // source, dest
    Copy(String, String),       // source, dest
    Read(String),               // path
    List(String),               // path, "." when the directive names none
}
