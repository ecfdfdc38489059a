use super::state::{ConnectionState, Phase};
use crate::error::ChatError;
use crate::room::{MediaClient, MediaSink, RoomEvent, RoomHandle, TrackKind};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{error, info};

/// Owns the lifecycle of a single real-time room session.
///
/// The room handle is held exclusively here; other components only see the
/// event stream returned by `connect` and the state snapshots.
pub struct ConnectionManager {
    /// External media client capability
    client: Arc<dyn MediaClient>,

    /// Sink for the remote video track
    video_sink: Arc<dyn MediaSink>,

    /// Sink for the remote audio track
    audio_sink: Arc<dyn MediaSink>,

    /// Current connection status
    state: Mutex<ConnectionState>,

    /// Active room handle, if any
    room: Mutex<Option<Box<dyn RoomHandle>>>,
}

impl ConnectionManager {
    pub fn new(
        client: Arc<dyn MediaClient>,
        video_sink: Arc<dyn MediaSink>,
        audio_sink: Arc<dyn MediaSink>,
    ) -> Self {
        Self {
            client,
            video_sink,
            audio_sink,
            state: Mutex::new(ConnectionState::default()),
            room: Mutex::new(None),
        }
    }

    /// Connect to a room and enable the local microphone.
    ///
    /// Returns the room's event stream for the caller to pump. On any
    /// failure the phase moves to `Error` with the failure's message and no
    /// room handle is retained.
    pub async fn connect(
        &self,
        url: &str,
        token: &str,
    ) -> Result<mpsc::Receiver<RoomEvent>, ChatError> {
        self.set_state(Phase::Connecting, Some("Connecting to room...".to_string()))
            .await;

        let mut room = match self.client.connect(url, token).await {
            Ok(room) => room,
            Err(e) => {
                error!("Failed to connect to room: {}", e);
                self.set_state(Phase::Error, Some(e.to_string())).await;
                return Err(ChatError::RoomConnect(e.to_string()));
            }
        };

        // Microphone on by default for a voice conversation
        if let Err(e) = room.set_microphone_enabled(true).await {
            error!("Failed to enable microphone: {}", e);
            room.disconnect().await;
            self.set_state(Phase::Error, Some(e.to_string())).await;
            return Err(ChatError::Microphone(e.to_string()));
        }

        let events = match room.subscribe().await {
            Ok(events) => events,
            Err(e) => {
                error!("Failed to subscribe to room events: {}", e);
                room.disconnect().await;
                self.set_state(Phase::Error, Some(e.to_string())).await;
                return Err(ChatError::RoomConnect(e.to_string()));
            }
        };

        {
            let mut slot = self.room.lock().await;
            *slot = Some(room);
        }

        self.set_state(Phase::Connected, Some("Connected successfully".to_string()))
            .await;
        info!("Connected to room at {}", url);

        Ok(events)
    }

    /// Leave the room if connected. Safe to call when already disconnected.
    pub async fn disconnect(&self) {
        let room = self.room.lock().await.take();
        if let Some(mut room) = room {
            room.disconnect().await;
            info!("Disconnected from room");
        }

        let mut state = self.state.lock().await;
        if state.phase != Phase::Disconnected {
            *state = ConnectionState::default();
        }
    }

    /// Flip the local microphone; returns the new enabled state.
    ///
    /// Without an active room this is a no-op reporting `false`.
    pub async fn toggle_microphone(&self) -> Result<bool, ChatError> {
        let slot = self.room.lock().await;
        match slot.as_ref() {
            Some(room) => {
                let enabled = !room.is_microphone_enabled();
                room.set_microphone_enabled(enabled)
                    .await
                    .map_err(|e| ChatError::Microphone(e.to_string()))?;
                Ok(enabled)
            }
            None => Ok(false),
        }
    }

    /// Current connection status snapshot.
    pub async fn state(&self) -> ConnectionState {
        self.state.lock().await.clone()
    }

    /// React to room lifecycle events: track sink management and the
    /// externally initiated end of the session.
    pub async fn handle_room_event(&self, event: &RoomEvent) {
        match event {
            RoomEvent::TrackSubscribed { track } => {
                // Last attach wins if a second track of the same kind shows up
                match track.kind {
                    TrackKind::Video => self.video_sink.attach(track),
                    TrackKind::Audio => self.audio_sink.attach(track),
                }
                info!("Track subscribed: {:?} from {}", track.kind, track.participant);
            }
            RoomEvent::TrackUnsubscribed { track } => {
                match track.kind {
                    TrackKind::Video => self.video_sink.detach(),
                    TrackKind::Audio => self.audio_sink.detach(),
                }
                info!("Track unsubscribed: {:?}", track.kind);
            }
            RoomEvent::Disconnected => {
                let _ = self.room.lock().await.take();
                let mut state = self.state.lock().await;
                *state = ConnectionState::new(
                    Phase::Disconnected,
                    Some("Disconnected from room".to_string()),
                );
                info!("Room session ended");
            }
            _ => {}
        }
    }

    async fn set_state(&self, phase: Phase, detail: Option<String>) {
        let mut state = self.state.lock().await;
        *state = ConnectionState::new(phase, detail);
    }
}
