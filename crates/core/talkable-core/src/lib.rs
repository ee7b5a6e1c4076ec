//! Talkable core types and runtime support
//!
//! This crate provides the shared foundation for the Talkable web client:
//!
//! - Conversation message types exchanged with the chat proxy
//! - Uploaded-document types and identifier derivation
//! - Error type and crate-wide `Result` alias
//! - Environment-variable configuration helpers
//! - Logging bootstrap and namespaced logger
//! - Service trait for stateful, long-running components
//!
//! # Example
//!
//! ```
//! use talkable_core::{derive_doc_id, Message};
//!
//! let msg = Message::user("make the header sticky");
//! assert_eq!(msg.content, "make the header sticky");
//!
//! let doc_id = derive_doc_id("landing page.html", 1_700_000_000_000);
//! assert_eq!(doc_id, "landing_page_html_1700000000000");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod document;
pub mod error;
pub mod message;
pub mod service;
pub mod utils;

// Re-export main types
pub use config::{
    get_env_bool, get_env_int, get_env_or, get_required_env, load_env, validate_env,
};
pub use document::{derive_doc_id, DocumentUpload, STORAGE_KEY_DOC_ID, STORAGE_KEY_HTML};
pub use error::{Result, TalkableError};
pub use message::{Message, MessageRole};
pub use service::{Service, ServiceHealth};
