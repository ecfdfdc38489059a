use super::state::AppState;
use crate::backend::SavedMessage;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveTranscriptRequest {
    pub transcript: Vec<SavedMessage>,
}

#[derive(Debug, Serialize)]
pub struct SaveTranscriptResponse {
    pub success: bool,
    pub message_count: u64,
    pub name: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/token
/// Mint a fresh room/participant pair and fetch an access token
pub async fn get_token(State(state): State<AppState>) -> impl IntoResponse {
    match state.tokens.fetch_token().await {
        Ok(grant) => (StatusCode::OK, Json(TokenResponse { token: grant.token })).into_response(),
        Err(e) => {
            error!("Token request failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Token request failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// POST /api/transcript
/// Persist a finished conversation transcript (system messages excluded)
pub async fn save_transcript(
    State(state): State<AppState>,
    Json(req): Json<SaveTranscriptRequest>,
) -> impl IntoResponse {
    let messages: Vec<SavedMessage> = req
        .transcript
        .into_iter()
        .filter(|message| message.kind != "system")
        .collect();

    if messages.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No user/avatar messages to save".to_string(),
            }),
        )
            .into_response();
    }

    info!("Forwarding {} transcript messages", messages.len());

    match state.store.save(&messages).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(SaveTranscriptResponse {
                success: true,
                message_count: receipt.message_count.unwrap_or(messages.len() as u64),
                name: receipt.name,
                company: receipt.company,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to save transcript: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Failed to save transcript: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
