//! Talkable web adaptor
//!
//! Serves the landing and editor pages as embedded templates and exposes
//! the two proxy endpoints that relay to the external backend:
//!
//! - `POST /api/chat` forwards a message history to the conversational
//!   service and returns `{role: "assistant", content}` on success
//! - `POST /api/upload` forwards an uploaded document to the document
//!   store and passes the store's status and body through unchanged
//!
//! Every failure mode of either proxy collapses into a fixed 500 JSON
//! envelope; upstream detail is logged, never returned.

use axum::extract::rejection::JsonRejection;
use axum::extract::State as AxumState;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use talkable_core::{DocumentUpload, Message, Result, Service, ServiceHealth, TalkableError};
use talkable_provider_langgraph::{ChatReply, LangGraphClient, DEFAULT_CHAT_SERVICE_URL};
use talkable_storage_chroma::{ChromaStoreClient, DEFAULT_STORE_SERVICE_URL};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

mod templates;

/// Fixed envelope body for chat proxy failures
const CHAT_PROXY_ERROR: &str = "Error calling LangGraph service";

/// Fixed envelope body for upload proxy failures
const UPLOAD_PROXY_ERROR: &str = "Failed to proxy to ChromaDB backend.";

/// Web UI configuration
#[derive(Debug, Clone)]
pub struct WebUiConfig {
    /// Whether the server should start at all
    pub enabled: bool,

    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Base URL of the external conversational service
    pub chat_service_url: String,

    /// Base URL of the external document store
    pub store_service_url: String,

    /// Enable permissive CORS
    pub enable_cors: bool,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "127.0.0.1".into(),
            port: 3000,
            chat_service_url: DEFAULT_CHAT_SERVICE_URL.into(),
            store_service_url: DEFAULT_STORE_SERVICE_URL.into(),
            enable_cors: true,
        }
    }
}

/// Web UI server: pages plus proxy endpoints
#[derive(Clone)]
pub struct WebUiServer {
    /// Server configuration
    pub config: Arc<WebUiConfig>,
    chat: Arc<LangGraphClient>,
    store: Arc<ChromaStoreClient>,
    running: Arc<AtomicBool>,
}

/// Request body of the chat proxy endpoint
#[derive(Debug, Deserialize)]
pub struct ChatProxyRequest {
    /// Full conversation history, oldest first
    pub messages: Vec<Message>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the handler runs
    pub status: &'static str,
    /// Service identifier
    pub service: &'static str,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

/// Fixed 500 error envelope returned by the proxy endpoints
struct ProxyError(&'static str);

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0 })),
        )
            .into_response()
    }
}

impl WebUiServer {
    /// Create a new server from configuration
    ///
    /// # Errors
    /// Returns an error if either backend base URL is invalid
    pub fn new(config: WebUiConfig) -> Result<Self> {
        let chat = LangGraphClient::new(Some(config.chat_service_url.clone()))?;
        let store = ChromaStoreClient::new(Some(config.store_service_url.clone()))?;
        Ok(Self {
            config: Arc::new(config),
            chat: Arc::new(chat),
            store: Arc::new(store),
            running: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Build the axum router (public so tests and embedders can serve it)
    pub fn router(&self) -> Router {
        let mut router = Router::new()
            .route("/", get(landing_page))
            .route("/editor", get(editor_page))
            .route("/health", get(health_check))
            .route("/api/chat", post(chat_proxy))
            .route("/api/upload", post(upload_proxy))
            .with_state(self.clone());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        router
    }

    /// Start serving in a background task
    pub async fn start(&self) -> Result<()> {
        if !self.config.enabled {
            return Ok(());
        }
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TalkableError::service(format!("Failed to bind to {}: {}", addr, e)))?;
        info!("Starting Talkable web UI on {}", addr);

        let router = self.router();
        let running = self.running.clone();
        running.store(true, Ordering::SeqCst);
        tokio::spawn(async move {
            let serve = axum::serve(listener, router).with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            });
            if let Err(e) = serve.await {
                error!("Server error: {}", e);
            }
            running.store(false, Ordering::SeqCst);
        });
        Ok(())
    }

    /// Stop the server
    pub async fn stop(&self) -> Result<()> {
        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait::async_trait]
impl Service for WebUiServer {
    fn service_type(&self) -> &str {
        "web-ui"
    }

    async fn start(&mut self) -> Result<()> {
        WebUiServer::start(self).await
    }

    async fn stop(&mut self) -> Result<()> {
        WebUiServer::stop(self).await
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(if Service::is_running(self) {
            ServiceHealth::Healthy
        } else {
            ServiceHealth::Unhealthy
        })
    }
}

async fn landing_page() -> Html<String> {
    Html(templates::landing_template())
}

async fn editor_page() -> Html<String> {
    Html(templates::editor_template())
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "talkable-web",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Relay a message history to the conversational service
///
/// Success: 200 with `{role: "assistant", content}` built from the
/// upstream reply; `tool_results` is discarded. Anything else, including
/// a malformed request body, becomes the fixed 500 envelope.
async fn chat_proxy(
    AxumState(state): AxumState<WebUiServer>,
    payload: std::result::Result<Json<ChatProxyRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            warn!("Malformed chat request: {}", rejection);
            return ProxyError(CHAT_PROXY_ERROR).into_response();
        }
    };

    match state.chat.chat(&request.messages).await {
        Ok(ChatReply { reply, .. }) => {
            (StatusCode::OK, Json(Message::assistant(reply))).into_response()
        }
        Err(err) => {
            warn!("Chat proxy failed: {}", err);
            ProxyError(CHAT_PROXY_ERROR).into_response()
        }
    }
}

/// Relay an uploaded document to the store, passing its response through
///
/// The upstream status code and body are returned unchanged. Connection
/// failures, unparseable upstream bodies, and malformed request bodies
/// become the fixed 500 envelope.
async fn upload_proxy(
    AxumState(state): AxumState<WebUiServer>,
    payload: std::result::Result<Json<DocumentUpload>, JsonRejection>,
) -> Response {
    let Json(upload) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            warn!("Malformed upload request: {}", rejection);
            return ProxyError(UPLOAD_PROXY_ERROR).into_response();
        }
    };

    match state.store.store_html(&upload).await {
        Ok(stored) => {
            let status = StatusCode::from_u16(stored.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(stored.body)).into_response()
        }
        Err(err) => {
            warn!("Upload proxy failed for '{}': {}", upload.doc_id, err);
            ProxyError(UPLOAD_PROXY_ERROR).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WebUiConfig::default();
        assert!(config.enabled);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.chat_service_url, "http://localhost:8000");
        assert_eq!(config.store_service_url, "http://localhost:8000");
    }

    #[test]
    fn test_new_rejects_invalid_backend_url() {
        let config = WebUiConfig {
            chat_service_url: "not a url".into(),
            ..Default::default()
        };
        assert!(WebUiServer::new(config).is_err());
    }

    #[test]
    fn test_proxy_error_response() {
        let response = ProxyError(CHAT_PROXY_ERROR).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_router_builds() {
        let server = WebUiServer::new(WebUiConfig::default()).unwrap();
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_service_health_follows_running_flag() {
        let server = WebUiServer::new(WebUiConfig::default()).unwrap();
        assert_eq!(server.health_check().await.unwrap(), ServiceHealth::Unhealthy);
        server.running.store(true, Ordering::SeqCst);
        assert_eq!(server.health_check().await.unwrap(), ServiceHealth::Healthy);
    }
}
