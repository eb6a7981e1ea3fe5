//! Convenience re-exports for common use.

pub use crate::client::{AgentClient, ChatAgent};
pub use crate::config::AgentConfig;
pub use crate::error::{AgentCommunicationError, ErrorCategory, Result};
pub use crate::session::{ConversationSession, SessionPhase, SessionState, Turn, UiFlag};
pub use crate::types::{ChatEntry, InboundMessage, OutboundMessage, Role};
