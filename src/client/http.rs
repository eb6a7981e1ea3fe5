//! HTTP client for the sales agent chat endpoint.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::AgentConfig;
use crate::error::AgentCommunicationError;
use crate::types::{InboundMessage, OutboundMessage};

use super::ChatAgent;

/// Talks to `{base_url}/api/v1/sales/chat`.
///
/// Cheap to clone and safe to share between sessions: the only state is the
/// immutable config and a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct AgentClient {
    config: AgentConfig,
    http: reqwest::Client,
}

impl AgentClient {
    pub fn new(config: AgentConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a caller-provided `reqwest::Client` (proxies, custom TLS, ...).
    pub fn with_http_client(config: AgentConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Send one message and return the agent's reply.
    ///
    /// The call is made exactly once. Any transport failure, timeout,
    /// non-success status or malformed body becomes an
    /// [`AgentCommunicationError`].
    pub async fn send(
        &self,
        content: &str,
        customer_id: &str,
    ) -> Result<InboundMessage, AgentCommunicationError> {
        let request = OutboundMessage::new(content, customer_id);
        let url = self.config.chat_url();

        debug!(url = %url, customer_id, "Sending message to agent");

        let resp = self
            .http
            .post(&url)
            .timeout(self.config.timeout())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), customer_id, "Agent returned an error status");
            return Err(AgentCommunicationError::status(status.as_u16(), body));
        }

        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        let reply: InboundMessage = serde_json::from_str(&body)?;

        debug!(status = status.as_u16(), reply_len = reply.content.len(), "Agent replied");
        Ok(reply)
    }

    fn transport_error(&self, error: reqwest::Error) -> AgentCommunicationError {
        if error.is_timeout() {
            AgentCommunicationError::Timeout(self.config.timeout().as_millis() as u64)
        } else {
            AgentCommunicationError::Transport(error)
        }
    }
}

#[async_trait]
impl ChatAgent for AgentClient {
    async fn send(
        &self,
        content: &str,
        customer_id: &str,
    ) -> Result<InboundMessage, AgentCommunicationError> {
        AgentClient::send(self, content, customer_id).await
    }
}
