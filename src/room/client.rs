use super::events::{RemoteTrack, RoomEvent};
use anyhow::Result;
use tokio::sync::mpsc;

/// Entry point into the external real-time media library.
#[async_trait::async_trait]
pub trait MediaClient: Send + Sync {
    /// Join a room at `url` using the given access token.
    async fn connect(&self, url: &str, token: &str) -> Result<Box<dyn RoomHandle>>;
}

/// An active room session.
///
/// Exactly one handle exists per session and it is exclusively owned by the
/// connection manager for the session's duration.
#[async_trait::async_trait]
pub trait RoomHandle: Send + Sync {
    /// Subscribe to the room's event stream.
    ///
    /// Single consumer. Events are delivered in the order the transport
    /// delivers them, starting with `Connected` for the current session.
    async fn subscribe(&mut self) -> Result<mpsc::Receiver<RoomEvent>>;

    /// Enable or disable the local microphone.
    async fn set_microphone_enabled(&self, enabled: bool) -> Result<()>;

    /// Current local microphone state.
    fn is_microphone_enabled(&self) -> bool;

    /// Leave the room and release the underlying session.
    async fn disconnect(&mut self);
}

/// Rendering sink for one remote track.
///
/// Sinks are injected into the connection manager at construction; the
/// manager attaches the first subscribed video track to the video sink and
/// the first audio track to the audio sink. A later track of the same kind
/// replaces the earlier one (two-party call model).
pub trait MediaSink: Send + Sync {
    fn attach(&self, track: &RemoteTrack);
    fn detach(&self);
}
