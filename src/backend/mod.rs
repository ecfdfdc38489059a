//! Backend collaborators
//!
//! Two thin HTTP calls back the chat session: token issuance before a room
//! connect, and transcript persistence when a chat ends. Both are modeled
//! as traits so the session controller and HTTP layer can be exercised
//! without a live backend; `BackendClient` is the real implementation.

pub mod client;
pub mod messages;

pub use client::{BackendClient, TokenIssuer, TranscriptStore};
pub use messages::{ChatHistoryRequest, SaveReceipt, SavedMessage, TokenGrant};
