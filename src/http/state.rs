use crate::backend::{TokenIssuer, TranscriptStore};
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Token-issuing collaborator
    pub tokens: Arc<dyn TokenIssuer>,

    /// Transcript-persistence collaborator
    pub store: Arc<dyn TranscriptStore>,
}

impl AppState {
    pub fn new(tokens: Arc<dyn TokenIssuer>, store: Arc<dyn TranscriptStore>) -> Self {
        Self { tokens, store }
    }
}
