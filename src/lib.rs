//! Sales Chat: client and session state for a remote sales agent.
//!
//! Sends free-text messages to an HTTP agent service and keeps the resulting
//! conversation as an ordered, append-only thread that a UI can render.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use sales_chat::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let client = AgentClient::new(AgentConfig::from_env());
//! let mut session = ConversationSession::new(Arc::new(client));
//!
//! let reply = session.submit_user_message("what is my name").await?;
//! println!("{}", reply.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod session;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
