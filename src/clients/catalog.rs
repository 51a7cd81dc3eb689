use reqwest::header::HeaderValue;
use reqwest::{Client, Method, RequestBuilder};

use crate::auth::{ROLE_HEADER, resolve_role};
use crate::clients::{ClientError, join_url};
use crate::config::AppConfig;
use crate::session::SessionState;

/// CatalogClient
///
/// Client for the primary backend proxy (book catalog, borrowing, users).
/// Every request it builds passes through the role interceptor: when the
/// stored identity blob resolves to a role, the request carries an `X-Role`
/// header with the role's wire value.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    session: SessionState,
}

impl CatalogClient {
    /// new
    ///
    /// Builds the client from the loaded configuration: fixed base URL and
    /// the catalog request timeout. The session handle is consulted again on
    /// every request, so role changes after login are picked up immediately.
    pub fn new(config: &AppConfig, session: SessionState) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.catalog_timeout).build()?;

        Ok(Self {
            http,
            base_url: config.catalog_base_url.clone(),
            session,
        })
    }

    /// request
    ///
    /// Starts a request against `path` (relative to the configured base URL)
    /// with the role interceptor already applied. The returned builder is a
    /// plain `reqwest::RequestBuilder`; callers add bodies and send as usual.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, join_url(&self.base_url, path));
        self.inject_role_header(builder)
    }

    /// base_url
    ///
    /// The effective base URL, exposed for startup reporting.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // The request interceptor. Resolution failures and header-encoding
    // failures both leave the request unmodified: an outgoing request is
    // never blocked or rejected on account of the role header.
    fn inject_role_header(&self, builder: RequestBuilder) -> RequestBuilder {
        let Some(role) = resolve_role(self.session.as_ref()).role() else {
            return builder;
        };

        match HeaderValue::from_str(role.as_str()) {
            Ok(value) => builder.header(ROLE_HEADER, value),
            Err(_) => builder,
        }
    }
}
