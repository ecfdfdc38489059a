use super::messages::{ChatHistoryRequest, SaveReceipt, SavedMessage, TokenGrant};
use anyhow::{bail, Context, Result};
use reqwest::Client;
use tracing::info;

/// Collaborator that issues room access tokens.
#[async_trait::async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Mint a fresh room/participant pair and fetch a token for it.
    async fn fetch_token(&self) -> Result<TokenGrant>;
}

/// Collaborator that persists finished conversation transcripts.
#[async_trait::async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn save(&self, messages: &[SavedMessage]) -> Result<SaveReceipt>;
}

/// HTTP client for the token and persistence backend.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl TokenIssuer for BackendClient {
    async fn fetch_token(&self) -> Result<TokenGrant> {
        let room_name = format!("avatar-room-{}", uuid::Uuid::new_v4());
        let participant_name = format!("user-{}", uuid::Uuid::new_v4());

        info!(
            "Requesting token for {} in room {}",
            participant_name, room_name
        );

        let response = self
            .client
            .get(format!("{}/getToken", self.base_url))
            .query(&[
                ("name", participant_name.as_str()),
                ("room", room_name.as_str()),
            ])
            .send()
            .await
            .context("Failed to reach token endpoint")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read token response")?;

        if !status.is_success() {
            bail!("Token request failed: {} - {}", status, body);
        }
        if body.is_empty() {
            bail!("Token endpoint returned an empty token");
        }

        Ok(TokenGrant {
            token: body,
            room_name,
            participant_name,
        })
    }
}

#[async_trait::async_trait]
impl TranscriptStore for BackendClient {
    async fn save(&self, messages: &[SavedMessage]) -> Result<SaveReceipt> {
        if messages.is_empty() {
            bail!("No messages to save");
        }

        let request = ChatHistoryRequest {
            chat_history: messages.to_vec(),
        };

        let response = self
            .client
            .post(format!("{}/save-conversation", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to reach persistence endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Save request failed: {} - {}", status, body);
        }

        let receipt: SaveReceipt = response
            .json()
            .await
            .context("Failed to decode save receipt")?;

        info!("Transcript saved ({} messages)", messages.len());

        Ok(receipt)
    }
}
