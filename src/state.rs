//! # Session State
//!
//! Persists the last accepted workspace to `data/state.json` so a restarted
//! session picks up where the previous one left off.

use serde::{Deserialize, Serialize};
use std::fs;

pub const STATE_FILE: &str = "data/state.json";

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct SessionState {
    #[serde(default)]
    pub workspace_dir: Option<String>,
}

impl SessionState {
    /// Loads the state from `data/state.json` or returns default.
    pub fn load() -> Self {
        if let Ok(content) = fs::read_to_string(STATE_FILE) {
            if let Ok(state) = serde_json::from_str(&content) {
                return state;
            }
        }
        Self::default()
    }

    /// Persists the current state. Best effort.
    pub fn save(&self) {
        if let Ok(content) = serde_json::to_string_pretty(self) {
            let _ = fs::write(STATE_FILE, content);
        }
    }
}
