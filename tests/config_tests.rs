//! Tests for environment-driven configuration.

use std::sync::Mutex;
use std::time::Duration;

use sales_chat::config::{AgentConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Serializes tests that touch process environment variables.
static AGENT_ENV: Mutex<()> = Mutex::new(());

/// Run `body` with the given agent variables set (`Some`) or removed (`None`),
/// then put the previous values back.
fn with_agent_env(vars: &[(&str, Option<&str>)], body: impl FnOnce()) {
    let _lock = AGENT_ENV.lock().unwrap_or_else(|e| e.into_inner());

    let previous: Vec<_> = vars
        .iter()
        .map(|(name, _)| (name.to_string(), std::env::var_os(name)))
        .collect();
    for (name, value) in vars {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }

    body();

    for (name, value) in previous {
        match value {
            Some(value) => std::env::set_var(&name, value),
            None => std::env::remove_var(&name),
        }
    }
}

#[test]
fn from_env_uses_defaults_when_unset() {
    with_agent_env(&[("AGENT_URL", None), ("AGENT_TIMEOUT_SECS", None)], || {
        let config = AgentConfig::from_env();

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.chat_url(), "http://localhost:8000/api/v1/sales/chat");
    });
}

#[test]
fn from_env_reads_agent_url_and_timeout() {
    with_agent_env(
        &[
            ("AGENT_URL", Some("http://sales-agent:8080")),
            ("AGENT_TIMEOUT_SECS", Some("12")),
        ],
        || {
            let config = AgentConfig::from_env();

            assert_eq!(config.base_url(), "http://sales-agent:8080");
            assert_eq!(config.timeout(), Duration::from_secs(12));
            assert_eq!(config.chat_url(), "http://sales-agent:8080/api/v1/sales/chat");
        },
    );
}

#[test]
fn from_env_ignores_blank_url_and_bad_timeout() {
    with_agent_env(
        &[
            ("AGENT_URL", Some("   ")),
            ("AGENT_TIMEOUT_SECS", Some("soon")),
        ],
        || {
            let config = AgentConfig::from_env();

            assert_eq!(config.base_url(), DEFAULT_BASE_URL);
            assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        },
    );
}

#[test]
fn builder_defaults_match_default() {
    assert_eq!(AgentConfig::builder().build(), AgentConfig::default());
}

#[test]
fn builder_overrides_fields() {
    let config = AgentConfig::builder()
        .base_url("http://agent:1234")
        .timeout(Duration::from_secs(2))
        .build();

    assert_eq!(config.base_url(), "http://agent:1234");
    assert_eq!(config.timeout(), Duration::from_secs(2));
}
