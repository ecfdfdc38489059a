use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    System,
    Avatar,
    User,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::System => "system",
            EntryKind::Avatar => "avatar",
            EntryKind::User => "user",
        }
    }
}

/// A single display message in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub kind: EntryKind,

    /// Display name ("Aria", "You", "System", or a raw identity)
    pub sender: String,

    /// Message content, non-empty
    pub text: String,

    /// Arrival time; non-decreasing across the sequence
    pub created_at: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(kind: EntryKind, sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            sender: sender.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// How a participant identity maps onto conversation roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityClass {
    /// The AI avatar or its serving agent
    Avatar,
    /// The local user, named `user-<id>` by the token endpoint
    LocalUser,
    /// Anything else (reported as-is where it appears)
    Other,
}

/// Classify a participant identity string.
///
/// The avatar markers match case-insensitively and win over the local-user
/// marker; minted local identities are lowercase `user-<id>` so that marker
/// matches verbatim.
pub fn classify_identity(identity: &str) -> IdentityClass {
    let lowered = identity.to_lowercase();
    if lowered.contains("agent") || lowered.contains("tavus") || lowered.contains("aria") {
        IdentityClass::Avatar
    } else if identity.contains("user-") {
        IdentityClass::LocalUser
    } else {
        IdentityClass::Other
    }
}
