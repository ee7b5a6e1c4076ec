//! ChromaDB document store client
//!
//! Thin HTTP client for the external document store: POSTs an uploaded
//! document to `{base_url}/store_html` and hands the upstream status and
//! body back untouched, so the storage proxy can pass both through. The
//! store is responsible for deduplicating or rejecting resubmitted
//! identifiers; no idempotency handling happens here.

#![warn(missing_docs)]
#![warn(clippy::all)]

use reqwest::Client;
use serde::Deserialize;
use std::sync::{Arc, OnceLock};
use talkable_core::{DocumentUpload, Result, TalkableError};
use tracing::debug;

/// Default base URL of the document store
pub const DEFAULT_STORE_SERVICE_URL: &str = "http://localhost:8000";

/// Shared HTTP client for connection pooling to the store
static HTTP_CLIENT: OnceLock<Arc<Client>> = OnceLock::new();

fn get_http_client() -> Arc<Client> {
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

fn validate_base_url(base_url: &str) -> Result<()> {
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

/// Raw response from the document store, status and body as received
#[derive(Debug, Clone, Deserialize)]
pub struct StoreResponse {
    /// Upstream HTTP status code
    pub status: u16,

    /// Upstream response body, parsed as JSON but otherwise untouched
    pub body: serde_json::Value,
}

/// Client for the external document store
pub struct ChromaStoreClient {
    client: Arc<Client>,
    base_url: String,
}

impl ChromaStoreClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Optional base URL (defaults to the local backend)
    ///
    /// # Errors
    /// Returns an error if the base URL is empty or not http(s)
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_STORE_SERVICE_URL.to_string());
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

    /// Submit a document and return the store's response verbatim
    ///
    /// Both success and failure statuses come back as `Ok(StoreResponse)`;
    /// only connection failures and unparseable bodies are errors.
    pub async fn store_html(&self, upload: &DocumentUpload) -> Result<StoreResponse> {
        let url = format!("{}/store_html", self.base_url);
        debug!("Submitting document '{}' to {}", upload.doc_id, url);

        let response = self.client.post(&url).json(upload).send().await?;
        let status = response.status().as_u16();
        let body = response.json::<serde_json::Value>().await?;

        Ok(StoreResponse { status, body })
    }
}
