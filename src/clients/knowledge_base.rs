use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use crate::clients::{ClientError, join_url};
use crate::config::AppConfig;
use crate::notify::NotifierState;

/// Fixed notice used when the knowledge base answers 503 without a
/// human-readable body.
pub const KB_UNAVAILABLE_FALLBACK: &str =
    "Knowledge base service is not running or unavailable; start the knowledge base service on port 8000 first";

/// KnowledgeBaseClient
///
/// Client for the knowledge base service, reached through the same backend
/// proxy as the catalog but with its own timeout and a JSON default header.
/// Responses pass through the service-unavailable interceptor: a 503 reply
/// surfaces a user notice through the injected notifier and then still
/// propagates as a failure so downstream error handling runs.
#[derive(Clone)]
pub struct KnowledgeBaseClient {
    http: Client,
    base_url: String,
    notifier: NotifierState,
}

impl KnowledgeBaseClient {
    /// new
    ///
    /// Builds the client from the loaded configuration with the knowledge
    /// base timeout and `Content-Type: application/json` on every request.
    pub fn new(config: &AppConfig, notifier: NotifierState) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.knowledge_base_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.knowledge_base_base_url.clone(),
            notifier,
        })
    }

    /// request
    ///
    /// Starts a request against `path` relative to the configured base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, join_url(&self.base_url, path))
    }

    /// base_url
    ///
    /// The effective base URL, exposed for startup reporting.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// execute
    ///
    /// Sends the request and applies the response interceptor:
    /// - success passes through unchanged;
    /// - 503 derives a notice (plain-text body if present, else the fixed
    ///   fallback), surfaces it once via the notifier, then propagates the
    ///   failure;
    /// - every other non-success status propagates undecorated.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::SERVICE_UNAVAILABLE {
            let body = response.text().await.unwrap_or_default();
            let message = unavailable_message(&body);
            self.notifier.notify(&message);
            return Err(ClientError::ServiceUnavailable { message });
        }

        Err(ClientError::Status { status })
    }
}

/// unavailable_message
///
/// Derives the user-facing notice from a 503 response body. Only a bare
/// string body counts as a server-provided message: an empty body or a
/// structured (JSON object/array/number) body falls back to the fixed
/// notice, while a plain-text body is used verbatim.
pub fn unavailable_message(body: &str) -> String {
    if body.trim().is_empty() {
        return KB_UNAVAILABLE_FALLBACK.to_string();
    }

    match serde_json::from_str::<Value>(body) {
        // A JSON string body is a server-provided message.
        Ok(Value::String(message)) => message,
        // Any other JSON shape is not a displayable message.
        Ok(_) => KB_UNAVAILABLE_FALLBACK.to_string(),
        // Not JSON at all: treat the raw body as plain text.
        Err(_) => body.to_string(),
    }
}
