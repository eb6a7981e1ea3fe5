//! Agent client trait and HTTP implementation.

pub mod http;

pub use http::AgentClient;

use async_trait::async_trait;

use crate::error::AgentCommunicationError;
use crate::types::InboundMessage;

/// Anything that can answer a user message on behalf of the sales agent.
///
/// Implementations hold no per-conversation state; the `customer_id` is the
/// only thing correlating calls into one remembered thread.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Send one message and wait for the reply.
    async fn send(
        &self,
        content: &str,
        customer_id: &str,
    ) -> Result<InboundMessage, AgentCommunicationError>;
}
