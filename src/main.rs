//! # Main Entry Point
//!
//! Wires configuration, logging and the command processor together:
//! - Config: `data/config.yaml`
//! - Logging: file appender into `data/session.log` plus a console layer
//! - Processing: reads a model reply from a file or stdin and prints the
//!   aggregated outcome of every extracted command.

mod command;
mod config;
mod error;
mod executor;
mod extractor;
mod processor;
mod sandbox;
mod state;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;

use crate::config::AppConfig;
use crate::processor::CommandProcessor;
use crate::state::SessionState;

/// Drives sandboxed filesystem operations from an LLM reply.
#[derive(Debug, Parser)]
#[command(name = "filepilot", version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "data/config.yaml")]
    config: String,

    /// Workspace to sandbox operations into (overrides config and saved state).
    #[arg(long)]
    workspace: Option<String>,

    /// File holding the model reply; stdin is read when omitted.
    #[arg(long)]
    input: Option<String>,

    /// Print the workspace snapshot and exit.
    #[arg(long)]
    info: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data").context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = std::path::Path::new("data/session.log");
    if log_path.exists() {
        let _ = fs::remove_file(log_path);
    }

    let file_appender = tracing_appender::rolling::never("data", "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let default_filter = config
        .system
        .log_filter
        .clone()
        .unwrap_or_else(|| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    // Console logs go to stderr so stdout stays clean for command outcomes
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Starting filepilot...");

    // 3. Select the workspace: flag beats config beats saved state
    let mut session = SessionState::load();
    let workspace = cli
        .workspace
        .clone()
        .or_else(|| config.system.workspace_dir.clone())
        .or_else(|| session.workspace_dir.clone());

    let mut processor = CommandProcessor::new();
    if let Some(dir) = workspace {
        let dir = config::expand_tilde(&dir);
        if processor.set_working_directory(&dir) {
            session.workspace_dir = Some(dir);
            session.save();
        }
    }

    match processor.current_path() {
        Some(path) => tracing::info!("Active workspace: {}", path.display()),
        None => tracing::warn!("No workspace configured; commands will be rejected"),
    }

    if cli.info {
        println!("{}", processor.system_info());
        return Ok(());
    }

    // 4. Read the model reply
    let reply = match &cli.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    // 5. Process and print
    let outcome = processor.process(&reply).await;
    println!("{outcome}");

    Ok(())
}
