use crate::transcript::TranscriptEntry;
use serde::{Deserialize, Serialize};

/// Access grant minted for one chat session.
///
/// Room and participant names are generated per call; the caller never
/// supplies them.
#[derive(Debug, Clone)]
pub struct TokenGrant {
    pub token: String,
    pub room_name: String,
    pub participant_name: String,
}

/// One persisted conversation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedMessage {
    /// RFC3339 timestamp
    pub timestamp: String,
    pub speaker: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&TranscriptEntry> for SavedMessage {
    fn from(entry: &TranscriptEntry) -> Self {
        Self {
            timestamp: entry.created_at.to_rfc3339(),
            speaker: entry.sender.clone(),
            message: entry.text.clone(),
            kind: entry.kind.as_str().to_string(),
        }
    }
}

/// Body of the save-conversation call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatHistoryRequest {
    pub chat_history: Vec<SavedMessage>,
}

/// Receipt returned by the persistence backend.
///
/// The backend includes contact details it resolved for the conversation;
/// all of that is informational and may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveReceipt {
    pub success: bool,
    pub name: Option<String>,
    pub company: Option<String>,
    pub message_count: Option<u64>,
}
