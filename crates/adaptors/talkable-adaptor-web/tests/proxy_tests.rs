//! End-to-end tests for the web adaptor
//!
//! Each test serves the real router and a stub backend on ephemeral
//! ports, then drives the proxy endpoints over HTTP.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use talkable_adaptor_web::{WebUiConfig, WebUiServer};

/// Serve a router on an ephemeral port, returning its base URL
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Spin up the web UI pointed at the given backend
async fn spawn_ui(backend_url: &str) -> String {
    let config = WebUiConfig {
        chat_service_url: backend_url.to_string(),
        store_service_url: backend_url.to_string(),
        ..Default::default()
    };
    let server = WebUiServer::new(config).unwrap();
    serve(server.router()).await
}

fn happy_backend() -> Router {
    Router::new()
        .route(
            "/chat",
            post(|| async { Json(json!({"reply": "X", "tool_results": []})) }),
        )
        .route(
            "/store_html",
            post(|Json(_body): Json<serde_json::Value>| async {
                (StatusCode::CREATED, Json(json!({"status": "ok"})))
            }),
        )
}

fn failing_backend() -> Router {
    Router::new()
        .route(
            "/chat",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "graph exploded"})),
                )
            }),
        )
        .route(
            "/store_html",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"detail": "duplicate doc_id"})),
                )
            }),
        )
}

#[tokio::test]
async fn chat_proxy_normalizes_upstream_reply() {
    let backend = serve(happy_backend()).await;
    let ui = spawn_ui(&backend).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/chat", ui))
        .json(&json!({"messages": [{"role": "user", "content": "hi"}]}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"role": "assistant", "content": "X"}));
}

#[tokio::test]
async fn chat_proxy_collapses_upstream_failure() {
    let backend = serve(failing_backend()).await;
    let ui = spawn_ui(&backend).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/chat", ui))
        .json(&json!({"messages": [{"role": "user", "content": "hi"}]}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Error calling LangGraph service"}));
}

#[tokio::test]
async fn chat_proxy_collapses_unreachable_backend() {
    // nothing listens on port 1
    let ui = spawn_ui("http://127.0.0.1:1").await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/chat", ui))
        .json(&json!({"messages": []}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Error calling LangGraph service"}));
}

#[tokio::test]
async fn chat_proxy_collapses_malformed_request() {
    let backend = serve(happy_backend()).await;
    let ui = spawn_ui(&backend).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/chat", ui))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Error calling LangGraph service"}));
}

#[tokio::test]
async fn upload_proxy_passes_status_and_body_through() {
    let backend = serve(happy_backend()).await;
    let ui = spawn_ui(&backend).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/upload", ui))
        .json(&json!({
            "html_content": "<html></html>",
            "doc_id": "index_html_1700000000000",
            "metadata": {"user": "alice"},
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 201);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn upload_proxy_passes_upstream_rejection_through() {
    // a non-2xx store response is relayed as-is, not wrapped
    let backend = serve(failing_backend()).await;
    let ui = spawn_ui(&backend).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/upload", ui))
        .json(&json!({"html_content": "<p></p>", "doc_id": "p_1"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 422);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"detail": "duplicate doc_id"}));
}

#[tokio::test]
async fn upload_proxy_collapses_unreachable_backend() {
    let ui = spawn_ui("http://127.0.0.1:1").await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/upload", ui))
        .json(&json!({"html_content": "<p></p>", "doc_id": "p_1"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 500);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to proxy to ChromaDB backend."}));
}

#[tokio::test]
async fn pages_and_health_are_served() {
    let backend = serve(happy_backend()).await;
    let ui = spawn_ui(&backend).await;

    let landing = reqwest::get(format!("{}/", ui)).await.unwrap();
    assert_eq!(landing.status().as_u16(), 200);
    let landing_body = landing.text().await.unwrap();
    assert!(landing_body.contains("Upload your HTML file"));

    let editor = reqwest::get(format!("{}/editor", ui)).await.unwrap();
    assert_eq!(editor.status().as_u16(), 200);
    let editor_body = editor.text().await.unwrap();
    assert!(editor_body.contains("[No HTML file uploaded yet]"));

    let health = reqwest::get(format!("{}/health", ui)).await.unwrap();
    assert_eq!(health.status().as_u16(), 200);
    let health_body: serde_json::Value = health.json().await.unwrap();
    assert_eq!(health_body["status"], "ok");
}
