//! Error classification.

use strum::{Display, EnumString};

/// Broad error category.
///
/// `Transport` covers failures to reach the agent at all (connection refused,
/// DNS, timeout). `Protocol` covers an agent that answered, but not with a
/// success status and a well-formed reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Transport,
    Protocol,
}
