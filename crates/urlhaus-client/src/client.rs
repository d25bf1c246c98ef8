//! Main URLhaus API client implementation.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use urlhaus_core::{
    build_body, build_url, HashType, HostInfo, PayloadInfo, Query, Result, SignatureInfo,
    TagInfo, UrlInfo, UrlhausError, DEFAULT_BASE_URL,
};

/// Content type of every lookup request
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Main URLhaus API client
#[derive(Clone)]
pub struct UrlhausClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
}

impl UrlhausClient {
    /// Create a client for the public API using default settings
    pub fn new() -> Result<Self> {
        UrlhausClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> UrlhausClientBuilder {
        UrlhausClientBuilder::new()
    }

    /// Base URL every endpoint is resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Send a lookup and return the response body untouched.
    ///
    /// An empty body is returned as an empty vector; callers decide what
    /// that means.
    pub async fn fetch(&self, query: &Query) -> Result<Vec<u8>> {
        let url = build_url(&self.inner.base_url, query.endpoint())?;
        let body = build_body(query);
        debug!(url = %url, endpoint = %query.endpoint(), "POST form request");

        let response = self
            .inner
            .http
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        // The API reports lookup failures in the document itself, so the
        // body is handed back whatever the status.
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "URLhaus API returned a non-success status");
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "response received");

        Ok(bytes.to_vec())
    }

    /// Send a lookup and decode the response document.
    ///
    /// Returns `Ok(None)` when the API answers with an empty body.
    pub async fn lookup<T: DeserializeOwned>(&self, query: &Query) -> Result<Option<T>> {
        let body = self.fetch(query).await?;
        if body.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(UrlhausError::Json)
    }

    /// Get information about a host (domain or IP)
    pub async fn host(&self, host: impl Into<String>) -> Result<Option<HostInfo>> {
        self.lookup(&Query::Host(host.into())).await
    }

    /// Get information about a malware URL
    pub async fn url(&self, url: impl Into<String>) -> Result<Option<UrlInfo>> {
        self.lookup(&Query::Url(url.into())).await
    }

    /// Get information about a payload by its MD5 or SHA-256 hash
    pub async fn payload(
        &self,
        hash: impl Into<String>,
        hash_type: HashType,
    ) -> Result<Option<PayloadInfo>> {
        self.lookup(&Query::Payload {
            hash: hash.into(),
            hash_type,
        })
        .await
    }

    /// Get the URLs and payloads attributed to a malware signature
    pub async fn signature(&self, signature: impl Into<String>) -> Result<Option<SignatureInfo>> {
        self.lookup(&Query::Signature(signature.into())).await
    }

    /// Get the URLs carrying a tag
    pub async fn tag(&self, tag: impl Into<String>) -> Result<Option<TagInfo>> {
        self.lookup(&Query::Tag(tag.into())).await
    }
}

fn transport_error(err: reqwest::Error) -> UrlhausError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    if err.is_timeout() {
        UrlhausError::Timeout(message)
    } else if err.is_connect() {
        UrlhausError::Connection(message)
    } else {
        UrlhausError::Http(message)
    }
}

/// Builder for configuring a [`UrlhausClient`]
pub struct UrlhausClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for UrlhausClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlhausClientBuilder {
    /// Create a new builder pointing at the public API
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("urlhaus-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout. Without one the transport defaults apply.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<UrlhausClient> {
        url::Url::parse(&self.base_url)?;

        let mut http = HttpClient::builder()
            .user_agent(&self.user_agent)
            .gzip(true);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| UrlhausError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(UrlhausClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_public_api() {
        let client = UrlhausClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_rejects_unparseable_base() {
        let err = UrlhausClient::builder()
            .base_url("::not a url::")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, UrlhausError::InvalidUrl(_)));
    }
}
