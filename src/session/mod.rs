//! Chat session management
//!
//! This module provides the `SessionController` abstraction that composes:
//! - Token issuance from the backend collaborator
//! - Room connection lifecycle via `ConnectionManager`
//! - Event pumping into the `TranscriptAggregator`
//! - End-of-chat transcript persistence with a bounded wait
//! - Session state management

mod config;
mod controller;

pub use config::SessionConfig;
pub use controller::{EndChatReport, SessionController};
