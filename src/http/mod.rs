//! HTTP API server for the browser front-end
//!
//! This module provides the thin proxy routes the chat UI calls:
//! - GET /api/token - Mint a room/participant pair and fetch an access token
//! - POST /api/transcript - Persist a finished conversation transcript
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
