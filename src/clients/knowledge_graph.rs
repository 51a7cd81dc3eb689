use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};

use crate::clients::{ClientError, join_url};
use crate::config::AppConfig;

/// KnowledgeGraphClient
///
/// Client for the standalone knowledge graph service. Plain configured
/// transport: its own base URL and timeout, JSON default header, and no
/// interceptors on either direction.
#[derive(Clone)]
pub struct KnowledgeGraphClient {
    http: Client,
    base_url: String,
}

impl KnowledgeGraphClient {
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.knowledge_graph_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.knowledge_graph_base_url.clone(),
        })
    }

    /// Starts a request against `path` relative to the configured base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, join_url(&self.base_url, path))
    }

    /// The effective base URL, exposed for startup reporting.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
