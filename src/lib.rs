pub mod backend;
pub mod config;
pub mod connection;
pub mod error;
pub mod http;
pub mod room;
pub mod session;
pub mod transcript;

pub use backend::{
    BackendClient, ChatHistoryRequest, SaveReceipt, SavedMessage, TokenGrant, TokenIssuer,
    TranscriptStore,
};
pub use config::Config;
pub use connection::{ConnectionManager, ConnectionState, Phase};
pub use error::ChatError;
pub use http::{create_router, AppState};
pub use room::{
    resolve_media_client, MediaClient, MediaSink, RemoteTrack, RoomEvent, RoomHandle, TrackKind,
    TranscriptionSegment,
};
pub use session::{EndChatReport, SessionConfig, SessionController};
pub use transcript::{
    classify_identity, EntryKind, IdentityClass, TranscriptAggregator, TranscriptEntry,
};
