//! Per-conversation state: identity, history, and UI flags.

use std::collections::BTreeMap;

use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::types::{ChatEntry, Role};

/// UI flags the chat front-end toggles.
///
/// Flags are stored by name, so front-ends may also use names of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum UiFlag {
    /// Product catalog panel is open.
    ShowProducts,
    /// Meeting scheduler panel is open.
    ShowScheduler,
}

impl UiFlag {
    /// Name the flag is stored under.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A human entry paired with the reply that followed it, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn<'a> {
    pub human: &'a ChatEntry,
    pub reply: Option<&'a ChatEntry>,
}

impl Turn<'_> {
    pub fn is_answered(&self) -> bool {
        self.reply.is_some()
    }
}

/// Everything one conversation owns. Never shared between sessions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    customer_id: Option<String>,
    history: Vec<ChatEntry>,
    ui_flags: BTreeMap<String, bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_customer_id(customer_id: String) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Self::default()
        }
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    /// Generate the customer id on first call; later calls return the same id.
    pub(crate) fn ensure_customer_id(&mut self) -> &str {
        self.customer_id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
    }

    pub(crate) fn push(&mut self, entry: ChatEntry) {
        self.history.push(entry);
    }

    pub fn history(&self) -> &[ChatEntry] {
        &self.history
    }

    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.ui_flags.insert(name.into(), value);
    }

    /// Unset flags read as `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.ui_flags.get(name).copied().unwrap_or(false)
    }

    pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> {
        self.ui_flags.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Group history into turns, in display order.
    pub fn turns(&self) -> Vec<Turn<'_>> {
        let mut turns: Vec<Turn<'_>> = Vec::new();
        for entry in &self.history {
            match entry.role {
                Role::Human => turns.push(Turn {
                    human: entry,
                    reply: None,
                }),
                Role::Ai => {
                    if let Some(last) = turns.last_mut().filter(|t| t.reply.is_none()) {
                        last.reply = Some(entry);
                    }
                }
            }
        }
        turns
    }

    /// The latest human entry, if the agent never answered it.
    pub fn unanswered_turn(&self) -> Option<&ChatEntry> {
        self.history.last().filter(|entry| entry.is_human())
    }
}
