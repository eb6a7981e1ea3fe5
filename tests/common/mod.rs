//! Shared test helpers and mock agent.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use sales_chat::client::ChatAgent;
use sales_chat::error::AgentCommunicationError;
use sales_chat::types::InboundMessage;

/// A mock agent that returns canned replies and records every call.
#[derive(Default)]
pub struct MockAgent {
    replies: Mutex<Vec<Result<InboundMessage, AgentCommunicationError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn queue_reply(&self, text: &str) {
        self.replies.lock().unwrap().push(Ok(InboundMessage {
            content: text.to_string(),
        }));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: AgentCommunicationError) {
        self.replies.lock().unwrap().push(Err(error));
    }

    /// `(content, customer_id)` of every call, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatAgent for MockAgent {
    async fn send(
        &self,
        content: &str,
        customer_id: &str,
    ) -> Result<InboundMessage, AgentCommunicationError> {
        self.calls
            .lock()
            .unwrap()
            .push((content.to_string(), customer_id.to_string()));

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok(InboundMessage {
                content: format!("echo: {content}"),
            });
        }
        replies.remove(0)
    }
}
