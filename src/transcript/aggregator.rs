use super::entry::{classify_identity, EntryKind, IdentityClass, TranscriptEntry};
use crate::room::{RoomEvent, TranscriptionSegment};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

/// Display name used for avatar speech classified from transcriptions.
const AVATAR_NAME: &str = "Aria";

/// Display name used for the local user.
const LOCAL_USER_NAME: &str = "You";

/// Sender label for system entries.
const SYSTEM_SENDER: &str = "System";

/// Transcript payloads the backend pushes over the room data channel.
///
/// The channel also carries unrelated traffic; anything that fails to
/// decode into one of these shapes is dropped without comment.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum DataPayload {
    #[serde(rename = "transcript")]
    Avatar { speaker: String, message: String },

    #[serde(rename = "user_transcript")]
    User {
        speaker: Option<String>,
        message: String,
    },
}

/// Orders room events into an append-only list of transcript entries.
///
/// Events are handled one at a time on the session's pump task, so append
/// order is exactly delivery order.
#[derive(Debug, Default)]
pub struct TranscriptAggregator {
    entries: Mutex<Vec<TranscriptEntry>>,
}

impl TranscriptAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the transcript so far.
    pub async fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn push_system(&self, text: impl Into<String>) {
        self.push(EntryKind::System, SYSTEM_SENDER, text).await;
    }

    pub async fn push_avatar(&self, sender: impl Into<String>, text: impl Into<String>) {
        self.push(EntryKind::Avatar, sender, text).await;
    }

    pub async fn push_user(&self, sender: impl Into<String>, text: impl Into<String>) {
        self.push(EntryKind::User, sender, text).await;
    }

    /// Empty the transcript and announce it. Clearing is never silent, so
    /// the panel can confirm the action happened.
    pub async fn clear(&self) {
        let mut entries = self.entries.lock().await;
        entries.clear();
        entries.push(TranscriptEntry::new(
            EntryKind::System,
            SYSTEM_SENDER,
            "Transcript cleared",
        ));
    }

    /// Empty the transcript without a trace. Used when a session starts or
    /// is torn down.
    pub async fn reset(&self) {
        self.entries.lock().await.clear();
    }

    /// Classify one room event into zero or one transcript entries.
    pub async fn handle_room_event(&self, event: &RoomEvent) {
        match event {
            RoomEvent::Connected => {
                self.push_system("Conversation started. Waiting for Aria to connect...")
                    .await;
            }
            RoomEvent::ParticipantConnected { identity } => {
                if classify_identity(identity) == IdentityClass::Avatar {
                    self.push_system(format!("{} has joined the conversation", identity))
                        .await;
                }
            }
            RoomEvent::ParticipantDisconnected { identity } => {
                if classify_identity(identity) != IdentityClass::LocalUser {
                    self.push_system(format!("{} has left the conversation", identity))
                        .await;
                }
            }
            RoomEvent::TranscriptionReceived {
                participant,
                segments,
            } => {
                self.handle_transcription(participant.as_deref(), segments)
                    .await;
            }
            RoomEvent::DataReceived { payload } => {
                self.handle_data(payload).await;
            }
            _ => {}
        }
    }

    /// Concatenate the final segments and classify by speaker identity.
    /// Interim segments are revisions in flight and never displayed.
    async fn handle_transcription(
        &self,
        participant: Option<&str>,
        segments: &[TranscriptionSegment],
    ) {
        let text = segments
            .iter()
            .filter(|segment| segment.is_final)
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let identity = participant.unwrap_or("Unknown");
        match classify_identity(identity) {
            IdentityClass::Avatar => self.push_avatar(AVATAR_NAME, text).await,
            IdentityClass::LocalUser => self.push_user(LOCAL_USER_NAME, text).await,
            IdentityClass::Other => self.push_user(identity, text).await,
        }
    }

    /// Decode a data-channel payload; anything unrecognized is unrelated
    /// traffic and is dropped.
    async fn handle_data(&self, payload: &[u8]) {
        let text = match std::str::from_utf8(payload) {
            Ok(text) => text,
            Err(_) => return,
        };

        let payload = match serde_json::from_str::<DataPayload>(text) {
            Ok(payload) => payload,
            Err(_) => {
                debug!("Ignoring non-transcript data payload");
                return;
            }
        };

        match payload {
            DataPayload::Avatar { speaker, message } => {
                if speaker.is_empty() || message.is_empty() {
                    return;
                }
                self.push_avatar(speaker, message).await;
            }
            DataPayload::User { speaker, message } => {
                if message.is_empty() {
                    return;
                }
                let sender = match speaker {
                    Some(speaker) if !speaker.is_empty() => speaker,
                    _ => LOCAL_USER_NAME.to_string(),
                };
                self.push_user(sender, message).await;
            }
        }
    }

    async fn push(&self, kind: EntryKind, sender: impl Into<String>, text: impl Into<String>) {
        self.entries
            .lock()
            .await
            .push(TranscriptEntry::new(kind, sender, text));
    }
}
