/// Kind of a remote media track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Audio,
    Video,
}

/// A remote track published by a participant within the room.
#[derive(Debug, Clone)]
pub struct RemoteTrack {
    /// Stable track identifier assigned by the media server
    pub sid: String,

    /// Audio or video
    pub kind: TrackKind,

    /// Identity of the publishing participant
    pub participant: String,
}

/// A unit of speech-to-text output from the media server.
///
/// Segments arrive repeatedly while wording is still being revised; only
/// segments marked final have stable text.
#[derive(Debug, Clone)]
pub struct TranscriptionSegment {
    pub text: String,
    pub is_final: bool,
}

/// Events emitted by an active room session.
///
/// Delivered in transport order over a single channel; consumers must not
/// assume any batching or reordering.
#[derive(Debug, Clone)]
pub enum RoomEvent {
    /// The local participant finished joining the room
    Connected,

    /// A remote participant joined
    ParticipantConnected { identity: String },

    /// A remote participant left
    ParticipantDisconnected { identity: String },

    /// A remote track became available for rendering
    TrackSubscribed { track: RemoteTrack },

    /// A previously subscribed track went away
    TrackUnsubscribed { track: RemoteTrack },

    /// Raw bytes received on the room data channel
    DataReceived { payload: Vec<u8> },

    /// Speech-to-text segments for one participant
    TranscriptionReceived {
        participant: Option<String>,
        segments: Vec<TranscriptionSegment>,
    },

    /// The room session ended (server side or network loss)
    Disconnected,
}
