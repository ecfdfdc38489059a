use std::time::Duration;
use thiserror::Error;

/// Failure taxonomy for chat session operations.
///
/// Startup failures (token issuance, room connect) abort the session and
/// leave it inactive. Save failures are best-effort: they are reported to
/// the caller but never block session teardown.
#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("Token request failed: {0}")]
    TokenRequest(String),

    #[error("Room connect failed: {0}")]
    RoomConnect(String),

    #[error("Microphone unavailable: {0}")]
    Microphone(String),

    #[error("Failed to save conversation: {0}")]
    TranscriptSave(String),

    #[error("Save is taking longer than expected. It may still complete in the background.")]
    TranscriptSaveTimedOut(Duration),

    #[error("Media client failed to load within {0:?}")]
    MediaClientUnavailable(Duration),
}
