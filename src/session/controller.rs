use super::config::SessionConfig;
use crate::backend::{SavedMessage, TokenIssuer, TranscriptStore};
use crate::connection::{ConnectionManager, ConnectionState};
use crate::error::ChatError;
use crate::room::RoomEvent;
use crate::transcript::{EntryKind, TranscriptAggregator, TranscriptEntry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Outcome of ending a chat, for the presentation layer.
///
/// Save problems land here rather than in an `Err`: persistence is
/// best-effort and never blocks teardown.
#[derive(Debug, Clone, Default)]
pub struct EndChatReport {
    /// Messages submitted to the persistence backend
    pub messages_saved: usize,

    /// Non-fatal problem encountered while saving, if any
    pub warning: Option<ChatError>,
}

/// Composes the connection manager and transcript aggregator for one chat
/// session at a time.
pub struct SessionController {
    config: SessionConfig,

    /// Room connection lifecycle
    manager: Arc<ConnectionManager>,

    /// Transcript built from room events
    aggregator: Arc<TranscriptAggregator>,

    /// Token-issuing collaborator
    tokens: Arc<dyn TokenIssuer>,

    /// Transcript-persistence collaborator
    store: Arc<dyn TranscriptStore>,

    /// Whether a chat session is currently active
    is_active: AtomicBool,

    /// Handle for the room event pump task
    pump_handle: Mutex<Option<JoinHandle<()>>>,
}

impl SessionController {
    pub fn new(
        config: SessionConfig,
        manager: Arc<ConnectionManager>,
        aggregator: Arc<TranscriptAggregator>,
        tokens: Arc<dyn TokenIssuer>,
        store: Arc<dyn TranscriptStore>,
    ) -> Self {
        Self {
            config,
            manager,
            aggregator,
            tokens,
            store,
            is_active: AtomicBool::new(false),
            pump_handle: Mutex::new(None),
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active.load(Ordering::SeqCst)
    }

    /// Start a chat: fetch a token, connect to the room, and begin pumping
    /// room events into the transcript.
    ///
    /// On any failure along this path the session stays inactive and the
    /// error is returned for the presentation layer to display.
    pub async fn start_chat(&self) -> Result<(), ChatError> {
        if self.is_active.load(Ordering::SeqCst) {
            warn!("Chat already active");
            return Ok(());
        }

        // Fresh session: nothing carries over from the previous one
        self.aggregator.reset().await;
        self.manager.disconnect().await;

        let grant = match self.tokens.fetch_token().await {
            Ok(grant) => grant,
            Err(e) => {
                error!("Token request failed: {}", e);
                return Err(ChatError::TokenRequest(e.to_string()));
            }
        };

        let mut events = self
            .manager
            .connect(&self.config.media_url, &grant.token)
            .await?;

        // Single pump task: handlers run one event at a time, so transcript
        // order is exactly delivery order
        let manager = Arc::clone(&self.manager);
        let aggregator = Arc::clone(&self.aggregator);
        let pump = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                manager.handle_room_event(&event).await;
                aggregator.handle_room_event(&event).await;
                if matches!(event, RoomEvent::Disconnected) {
                    break;
                }
            }
            info!("Room event pump stopped");
        });

        {
            let mut handle = self.pump_handle.lock().await;
            *handle = Some(pump);
        }

        self.is_active.store(true, Ordering::SeqCst);
        info!("Chat session started in {}", grant.room_name);

        Ok(())
    }

    /// End the chat: persist the transcript if there is anything worth
    /// keeping, then tear the session down unconditionally.
    pub async fn end_chat(&self) -> EndChatReport {
        let mut report = EndChatReport::default();

        let entries = self.aggregator.entries().await;
        let messages: Vec<SavedMessage> = entries
            .iter()
            .filter(|entry| entry.kind != EntryKind::System)
            .map(SavedMessage::from)
            .collect();

        if messages.is_empty() {
            info!("No transcript to save");
        } else {
            info!("Saving {} transcript messages", messages.len());
            match tokio::time::timeout(self.config.save_timeout, self.store.save(&messages)).await
            {
                Ok(Ok(receipt)) => {
                    report.messages_saved = messages.len();
                    match (&receipt.name, &receipt.company) {
                        (Some(name), Some(company)) => {
                            info!("Transcript saved for {} from {}", name, company)
                        }
                        _ => info!("Transcript saved"),
                    }
                }
                Ok(Err(e)) => {
                    error!("Failed to save transcript: {}", e);
                    report.warning = Some(ChatError::TranscriptSave(e.to_string()));
                }
                Err(_) => {
                    warn!(
                        "Transcript save still pending after {:?}, proceeding with teardown",
                        self.config.save_timeout
                    );
                    report.warning =
                        Some(ChatError::TranscriptSaveTimedOut(self.config.save_timeout));
                }
            }
        }

        // Teardown happens regardless of how the save went
        self.manager.disconnect().await;
        {
            let mut handle = self.pump_handle.lock().await;
            if let Some(pump) = handle.take() {
                pump.abort();
            }
        }
        self.aggregator.reset().await;
        self.is_active.store(false, Ordering::SeqCst);
        info!("Chat session ended");

        report
    }

    /// Empty the transcript on user request; the aggregator announces it.
    pub async fn clear_transcript(&self) {
        self.aggregator.clear().await;
    }

    /// Flip the local microphone; returns the new enabled state.
    pub async fn toggle_microphone(&self) -> Result<bool, ChatError> {
        self.manager.toggle_microphone().await
    }

    /// Current connection status snapshot.
    pub async fn connection_state(&self) -> ConnectionState {
        self.manager.state().await
    }

    /// Transcript snapshot for the presentation layer.
    pub async fn transcript(&self) -> Vec<TranscriptEntry> {
        self.aggregator.entries().await
    }
}
