//! Error types for agent communication.

pub mod unified;

pub use unified::ErrorCategory;

use thiserror::Error;

/// The single failure kind surfaced by an agent call.
///
/// Every variant renders as `Error communicating with agent API: ...` so the
/// presentation layer can show the message verbatim.
#[derive(Error, Debug)]
pub enum AgentCommunicationError {
    #[error("Error communicating with agent API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error communicating with agent API: no response within {0}ms")]
    Timeout(u64),

    #[error("Error communicating with agent API: status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Error communicating with agent API: invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AgentCommunicationError {
    /// Create a status error from a non-success response.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Classify this error into the transport/protocol taxonomy.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport(_) | Self::Timeout(_) => ErrorCategory::Transport,
            Self::Status { .. } | Self::Decode(_) => ErrorCategory::Protocol,
        }
    }

    /// HTTP status code, when the agent answered with a non-success status.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the call gave up waiting for the agent.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AgentCommunicationError>;
