use serde::{Deserialize, Serialize};

/// Phase of a connection attempt.
///
/// Per attempt: Disconnected -> Connecting -> (Connected | Error). The
/// return to Disconnected can happen from any phase, on explicit disconnect
/// or session teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Disconnected,
    Connecting,
    Connected,
    Error,
}

/// Connection status reported to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionState {
    pub phase: Phase,

    /// Optional human-readable status message
    pub detail: Option<String>,
}

impl ConnectionState {
    pub fn new(phase: Phase, detail: Option<String>) -> Self {
        Self { phase, detail }
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self {
            phase: Phase::Disconnected,
            detail: None,
        }
    }
}
