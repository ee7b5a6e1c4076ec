//! Uploaded document types and identifier derivation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Local storage key holding the raw uploaded HTML
pub const STORAGE_KEY_HTML: &str = "talkable_html";

/// Local storage key holding the uploaded document identifier
pub const STORAGE_KEY_DOC_ID: &str = "talkable_html_doc_id";

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").unwrap());

/// Derive a document identifier from a filename and a millisecond timestamp
///
/// Every non-word character of the filename is replaced with `_`, then the
/// timestamp is appended. The result is unique per distinct
/// filename+timestamp pair and safe to use as a store key or in metadata.
pub fn derive_doc_id(filename: &str, timestamp_ms: i64) -> String {
    format!("{}_{}", NON_WORD.replace_all(filename, "_"), timestamp_ms)
}

/// Derive a document identifier using the current wall-clock time
pub fn doc_id_now(filename: &str) -> String {
    derive_doc_id(filename, chrono::Utc::now().timestamp_millis())
}

/// An uploaded HTML document, immutable after creation
///
/// Created once per upload and submitted to the storage proxy; the same
/// content is cached in browser local storage for the preview pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpload {
    /// Raw HTML text of the uploaded file
    pub html_content: String,

    /// Identifier derived from filename and creation timestamp
    pub doc_id: String,

    /// Opaque key-value metadata, forwarded as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl DocumentUpload {
    /// Create a document upload for the given content and identifier
    pub fn new(html_content: impl Into<String>, doc_id: impl Into<String>) -> Self {
        Self {
            html_content: html_content.into(),
            doc_id: doc_id.into(),
            metadata: None,
        }
    }

    /// Attach a metadata mapping
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
