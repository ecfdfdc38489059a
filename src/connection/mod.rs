//! Room connection lifecycle
//!
//! `ConnectionManager` owns the single active room handle for a chat
//! session: connect, disconnect, microphone toggle, and attaching remote
//! tracks to the injected media sinks. `ConnectionState` reports the
//! current phase of the attempt to the presentation layer.

mod manager;
mod state;

pub use manager::ConnectionManager;
pub use state::{ConnectionState, Phase};
