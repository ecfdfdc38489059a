// Test doubles shared across the integration test crates.
#![allow(dead_code)]

use anyhow::{bail, Result};
use avatar_chat::{
    MediaClient, MediaSink, RemoteTrack, RoomEvent, RoomHandle, SaveReceipt, SavedMessage,
    TokenGrant, TokenIssuer, TranscriptStore,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// Sink double that records attach/detach calls.
#[derive(Default)]
pub struct RecordingSink {
    pub attached: Mutex<Vec<String>>,
    pub detached: AtomicUsize,
}

impl MediaSink for RecordingSink {
    fn attach(&self, track: &RemoteTrack) {
        self.attached.lock().unwrap().push(track.sid.clone());
    }

    fn detach(&self) {
        self.detached.fetch_add(1, Ordering::SeqCst);
    }
}

/// Room double backed by an mpsc channel the test drives.
pub struct MockRoom {
    mic_enabled: AtomicBool,
    mic_failure: bool,
    events: Mutex<Option<mpsc::Receiver<RoomEvent>>>,
    disconnected: Arc<AtomicBool>,
    mic_calls: Arc<Mutex<Vec<bool>>>,
}

#[async_trait::async_trait]
impl RoomHandle for MockRoom {
    async fn subscribe(&mut self) -> Result<mpsc::Receiver<RoomEvent>> {
        match self.events.lock().unwrap().take() {
            Some(events) => Ok(events),
            None => bail!("already subscribed"),
        }
    }

    async fn set_microphone_enabled(&self, enabled: bool) -> Result<()> {
        if self.mic_failure {
            bail!("Microphone permission denied");
        }
        self.mic_calls.lock().unwrap().push(enabled);
        self.mic_enabled.store(enabled, Ordering::SeqCst);
        Ok(())
    }

    fn is_microphone_enabled(&self) -> bool {
        self.mic_enabled.load(Ordering::SeqCst)
    }

    async fn disconnect(&mut self) {
        self.disconnected.store(true, Ordering::SeqCst);
    }
}

/// Handles a test keeps for observing one mock room.
pub struct RoomProbe {
    pub events: mpsc::Sender<RoomEvent>,
    pub disconnected: Arc<AtomicBool>,
    pub mic_calls: Arc<Mutex<Vec<bool>>>,
}

/// Media client double: connects to pre-queued mock rooms.
#[derive(Default)]
pub struct MockClient {
    pub mic_failure: bool,
    connect_failure: Mutex<Option<String>>,
    prepared: Mutex<Vec<mpsc::Receiver<RoomEvent>>>,
    probes: Mutex<Vec<(Arc<AtomicBool>, Arc<Mutex<Vec<bool>>>)>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        let client = Self::default();
        client.fail_next_connect(message);
        client
    }

    /// Make the next connect attempt fail; later attempts use the queue.
    pub fn fail_next_connect(&self, message: &str) {
        *self.connect_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Queue a room for the next connect; the probe lets the test feed
    /// events and observe teardown.
    pub fn add_room(&self) -> RoomProbe {
        let (tx, rx) = mpsc::channel(64);
        let disconnected = Arc::new(AtomicBool::new(false));
        let mic_calls = Arc::new(Mutex::new(Vec::new()));
        self.prepared.lock().unwrap().push(rx);
        self.probes
            .lock()
            .unwrap()
            .push((Arc::clone(&disconnected), Arc::clone(&mic_calls)));
        RoomProbe {
            events: tx,
            disconnected,
            mic_calls,
        }
    }
}

#[async_trait::async_trait]
impl MediaClient for MockClient {
    async fn connect(&self, _url: &str, _token: &str) -> Result<Box<dyn RoomHandle>> {
        if let Some(message) = self.connect_failure.lock().unwrap().take() {
            bail!("{}", message);
        }

        let events = {
            let mut prepared = self.prepared.lock().unwrap();
            if prepared.is_empty() {
                None
            } else {
                Some(prepared.remove(0))
            }
        };
        let probe = {
            let mut probes = self.probes.lock().unwrap();
            if probes.is_empty() {
                None
            } else {
                Some(probes.remove(0))
            }
        };
        match (events, probe) {
            (Some(events), Some((disconnected, mic_calls))) => Ok(Box::new(MockRoom {
                mic_enabled: AtomicBool::new(false),
                mic_failure: self.mic_failure,
                events: Mutex::new(Some(events)),
                disconnected,
                mic_calls,
            })),
            _ => bail!("no room prepared"),
        }
    }
}

/// Token issuer double.
#[derive(Default)]
pub struct MockIssuer {
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl MockIssuer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl TokenIssuer for MockIssuer {
    async fn fetch_token(&self) -> Result<TokenGrant> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            bail!("backend unreachable");
        }
        Ok(TokenGrant {
            token: "tok-test".to_string(),
            room_name: "avatar-room-test".to_string(),
            participant_name: "user-test".to_string(),
        })
    }
}

/// Transcript store double with optional delay and failure.
#[derive(Default)]
pub struct MockStore {
    pub fail: bool,
    pub delay: Option<Duration>,
    pub calls: AtomicUsize,
    pub saved: Mutex<Vec<Vec<SavedMessage>>>,
}

impl MockStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn hanging(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl TranscriptStore for MockStore {
    async fn save(&self, messages: &[SavedMessage]) -> Result<SaveReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            bail!("backend rejected the transcript");
        }
        self.saved.lock().unwrap().push(messages.to_vec());
        Ok(SaveReceipt {
            success: true,
            name: Some("Jane".to_string()),
            company: Some("Acme".to_string()),
            message_count: Some(messages.len() as u64),
        })
    }
}
