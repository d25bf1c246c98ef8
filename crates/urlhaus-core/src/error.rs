use thiserror::Error;

/// Result type alias for URLhaus operations
pub type Result<T> = std::result::Result<T, UrlhausError>;

/// Errors that can occur when querying the URLhaus API
#[derive(Error, Debug)]
pub enum UrlhausError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection failed (DNS, refused, TLS)
    #[error("connection failed: {0}")]
    Connection(String),

    /// Response body is not the JSON document the endpoint describes
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL or endpoint path could not be resolved
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl UrlhausError {
    /// Returns true if the error happened before any response was received
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Timeout(_) | Self::Connection(_)
        )
    }
}

impl From<url::ParseError> for UrlhausError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
