//! Core types for Sales Chat.

pub mod message;

pub use message::*;
