//! Terminal front-end for Sales Chat.

pub mod catalog;
pub mod chat;

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::AgentConfig;

/// Sales Chat CLI
#[derive(Parser, Debug)]
#[command(name = "sales-chat", version, about = "Chat with the sales agent from a terminal")]
pub struct Cli {
    /// Agent base URL (overrides AGENT_URL)
    #[arg(long, global = true)]
    pub agent_url: Option<String>,

    /// Seconds to wait for each reply (overrides AGENT_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive conversation
    Chat,
    /// Send a single message and print the reply
    Send(SendArgs),
}

/// Arguments for `sales-chat send`.
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Message to send
    pub message: String,
}

impl Cli {
    /// Apply command-line overrides on top of an environment-derived config.
    pub fn apply_overrides(&self, mut config: AgentConfig) -> AgentConfig {
        if let Some(ref url) = self.agent_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout_secs.filter(|s| *s > 0) {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}
