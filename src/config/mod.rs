//! Configuration (layered: code > env > `.env` file > defaults).

use std::time::Duration;

use bon::Builder;
use tracing::warn;

/// Base URL used when `AGENT_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Resource path of the chat endpoint, appended to the base URL.
pub const CHAT_PATH: &str = "/api/v1/sales/chat";

/// How long a single agent call may take before it fails.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const AGENT_URL_ENV: &str = "AGENT_URL";
pub const AGENT_TIMEOUT_ENV: &str = "AGENT_TIMEOUT_SECS";

/// Where the agent lives and how long to wait for it.
///
/// ```
/// use std::time::Duration;
/// use sales_chat::config::AgentConfig;
///
/// let config = AgentConfig::builder()
///     .base_url("http://agent.internal:9000/")
///     .timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.chat_url(), "http://agent.internal:9000/api/v1/sales/chat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct AgentConfig {
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    base_url: String,
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AgentConfig {
    /// Load from `AGENT_URL` and `AGENT_TIMEOUT_SECS`.
    ///
    /// A `.env` file in the working directory is read first; variables already
    /// present in the environment take precedence over it.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(AGENT_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(AGENT_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    value = %raw,
                    default_secs = DEFAULT_TIMEOUT.as_secs(),
                    "Ignoring invalid AGENT_TIMEOUT_SECS"
                ),
            }
        }

        config
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}{CHAT_PATH}", self.base_url.trim_end_matches('/'))
    }
}
