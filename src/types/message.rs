//! Message types for agent communication and chat history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Request body sent to the agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundMessage {
    pub content: String,
    pub customer_id: String,
}

impl OutboundMessage {
    pub fn new(content: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            customer_id: customer_id.into(),
        }
    }
}

/// Reply returned by the agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundMessage {
    pub content: String,
}

/// Who authored a chat entry.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Human,
    Ai,
}

/// One line of the rendered conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatEntry {
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatEntry {
    /// Create an entry for something the user typed.
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }

    /// Create an entry for an agent reply.
    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn is_human(&self) -> bool {
        self.role == Role::Human
    }
}
