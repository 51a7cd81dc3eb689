use reqwest::StatusCode;
use thiserror::Error;

/// Client Module Index
///
/// One module per configured HTTP client, mirroring the three upstream
/// services the application talks to. Each client owns its own base URL,
/// timeout, and default headers; the interceptors live with the client they
/// belong to.

/// Primary backend proxy client; injects the role header on every request.
pub mod catalog;

/// Knowledge base client (same proxy); observes service-unavailable replies.
pub mod knowledge_base;

/// Standalone knowledge graph service client; plain configured transport.
pub mod knowledge_graph;

pub use catalog::CatalogClient;
pub use knowledge_base::{KB_UNAVAILABLE_FALLBACK, KnowledgeBaseClient};
pub use knowledge_graph::KnowledgeGraphClient;

/// ClientError
///
/// Failure surface shared by the HTTP clients. Failures propagate once,
/// undecorated; there is no retry layer in front of any of them.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, DNS, timeout, or protocol-level failure from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The knowledge base answered 503. Carries the user-facing message that
    /// was surfaced through the notifier before the failure propagated.
    #[error("knowledge base unavailable: {message}")]
    ServiceUnavailable { message: String },

    /// Any other non-success status, passed through unchanged.
    #[error("request failed with status {status}")]
    Status { status: StatusCode },
}

// Joins a configured base URL and a request path without doubling slashes.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
