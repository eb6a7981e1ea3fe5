//! Conversation session: identity, ordered history, and agent calls.

pub mod state;

pub use state::{SessionState, Turn, UiFlag};

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::ChatAgent;
use crate::error::AgentCommunicationError;
use crate::types::{ChatEntry, InboundMessage};

/// Number of customer id characters shown in a conversation label.
const LABEL_LEN: usize = 8;

/// Where a session is in its lifecycle.
///
/// There is no closed phase; a session ends when it is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No customer id has been generated yet.
    Uninitialized,
    /// The customer id is fixed for the rest of the session.
    Active,
}

/// One user's conversation with the sales agent.
///
/// Submissions take `&mut self`, so a session processes one message at a
/// time; the next submission cannot start until the previous one settles.
pub struct ConversationSession {
    agent: Arc<dyn ChatAgent>,
    state: SessionState,
}

impl fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationSession")
            .field("agent", &"..")
            .field("state", &self.state)
            .finish()
    }
}

impl ConversationSession {
    /// Start an uninitialized session; the customer id is generated lazily.
    pub fn new(agent: Arc<dyn ChatAgent>) -> Self {
        Self {
            agent,
            state: SessionState::new(),
        }
    }

    /// Start a session bound to an existing customer id.
    pub fn with_customer_id(agent: Arc<dyn ChatAgent>, customer_id: impl Into<String>) -> Self {
        Self {
            agent,
            state: SessionState::with_customer_id(customer_id.into()),
        }
    }

    /// Generate the customer id if there is none yet and return it.
    pub fn ensure_identity(&mut self) -> &str {
        self.state.ensure_customer_id()
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state.customer_id() {
            Some(_) => SessionPhase::Active,
            None => SessionPhase::Uninitialized,
        }
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.state.customer_id()
    }

    /// Short form of the customer id for display, e.g. `1f0c9a2e...`.
    pub fn conversation_label(&self) -> Option<String> {
        self.state.customer_id().map(|id| {
            let prefix: String = id.chars().take(LABEL_LEN).collect();
            format!("{prefix}...")
        })
    }

    /// Record the user's message, ask the agent, and record its reply.
    ///
    /// The human entry is kept even when the agent call fails; in that case
    /// no ai entry is added and the error is returned unchanged.
    pub async fn submit_user_message(
        &mut self,
        text: impl Into<String>,
    ) -> Result<InboundMessage, AgentCommunicationError> {
        let text = text.into();
        let customer_id = self.ensure_identity().to_string();

        self.state.push(ChatEntry::human(text.as_str()));
        debug!(
            customer_id = %customer_id,
            history_len = self.state.history().len(),
            "Submitting user message"
        );

        match self.agent.send(&text, &customer_id).await {
            Ok(reply) => {
                self.state.push(ChatEntry::ai(reply.content.as_str()));
                Ok(reply)
            }
            Err(e) => {
                warn!(customer_id = %customer_id, error = %e, "Agent call failed");
                Err(e)
            }
        }
    }

    /// Set a named UI flag, such as [`UiFlag::ShowProducts`].
    pub fn toggle_flag(&mut self, name: impl Into<String>, value: bool) {
        self.state.set_flag(name, value);
    }

    pub fn flag(&self, name: &str) -> bool {
        self.state.flag(name)
    }

    pub fn history(&self) -> &[ChatEntry] {
        self.state.history()
    }

    pub fn turns(&self) -> Vec<Turn<'_>> {
        self.state.turns()
    }

    pub fn unanswered_turn(&self) -> Option<&ChatEntry> {
        self.state.unanswered_turn()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
