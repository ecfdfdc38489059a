use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// WebSocket URL of the real-time media server
    pub media_url: String,

    /// Bound on the end-of-chat transcript save; teardown proceeds once it
    /// elapses even if the backend has not answered
    pub save_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            media_url: "ws://localhost:7880".to_string(),
            save_timeout: Duration::from_secs(15),
        }
    }
}
