//! LangGraph conversational service client
//!
//! Thin HTTP client for the external chat backend: POSTs the full message
//! history to `{base_url}/chat` and returns the reply envelope. The
//! service is opaque; nothing here interprets the reply beyond
//! deserializing it.

#![warn(missing_docs)]
#![warn(clippy::all)]

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use talkable_core::{Message, Result, TalkableError};
use tracing::{debug, warn};

/// Default base URL of the conversational service
pub const DEFAULT_CHAT_SERVICE_URL: &str = "http://localhost:8000";

/// Shared HTTP client for connection pooling to backend services
static HTTP_CLIENT: OnceLock<Arc<Client>> = OnceLock::new();

/// Get or initialize the shared HTTP client
///
/// Returns Arc<Client> to avoid cloning and maintain connection pooling.
pub(crate) fn get_http_client() -> Arc<Client> {
    HTTP_CLIENT
        .get_or_init(|| {
            Arc::new(
                Client::builder()
                    .pool_max_idle_per_host(10)
                    .pool_idle_timeout(std::time::Duration::from_secs(300))
                    .connect_timeout(std::time::Duration::from_secs(10))
                    .build()
                    .unwrap_or_else(|_| Client::new()),
            )
        })
        .clone()
}

/// Validate a backend base URL
pub(crate) fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(TalkableError::validation("base URL cannot be empty"));
    }
    let parsed = url::Url::parse(base_url)
        .map_err(|e| TalkableError::validation(format!("invalid base URL '{}': {}", base_url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(TalkableError::validation(format!(
            "unsupported URL scheme '{}' for base URL '{}'",
            other, base_url
        ))),
    }
}

#[derive(Debug, Serialize)]
struct ChatPayload<'a> {
    messages: &'a [Message],
}

/// Reply envelope returned by the conversational service
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply text
    pub reply: String,

    /// Raw tool invocation results, if the service ran any tools
    #[serde(default)]
    pub tool_results: Vec<serde_json::Value>,
}

/// Client for the external conversational service
pub struct LangGraphClient {
    client: Arc<Client>,
    base_url: String,
}

impl LangGraphClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Optional base URL (defaults to the local backend)
    ///
    /// # Errors
    /// Returns an error if the base URL is empty or not http(s)
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_CHAT_SERVICE_URL.to_string());
        validate_base_url(&base_url)?;

        Ok(Self {
            client: get_http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward a message history and return the service's reply envelope
    ///
    /// Non-2xx upstream responses map to `TalkableError::Upstream` with the
    /// upstream status; connection failures map to `TalkableError::Network`.
    pub async fn chat(&self, messages: &[Message]) -> Result<ChatReply> {
        let url = format!("{}/chat", self.base_url);
        debug!("Forwarding {} messages to {}", messages.len(), url);

        let response = self
            .client
            .post(&url)
            .json(&ChatPayload { messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Chat service returned {}: {}", status, body);
            return Err(TalkableError::upstream(status.as_u16(), body));
        }

        Ok(response.json::<ChatReply>().await?)
    }
}
