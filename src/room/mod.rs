//! Real-time media client capability
//!
//! The media transport itself lives in an external client library. This
//! module defines the surface the rest of the crate consumes:
//! - `MediaClient` / `RoomHandle` traits for connecting and driving a room
//! - `RoomEvent` and its payload types, delivered over a channel
//! - `MediaSink` handles for rendering remote tracks
//! - `resolve_media_client` for acquiring the client with bounded retries

mod client;
mod events;
mod provider;

pub use client::{MediaClient, MediaSink, RoomHandle};
pub use events::{RemoteTrack, RoomEvent, TrackKind, TranscriptionSegment};
pub use provider::{resolve_media_client, DEFAULT_PROBE_DEADLINE, DEFAULT_PROBE_INTERVAL};
