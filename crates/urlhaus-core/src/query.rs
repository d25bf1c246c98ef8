//! Lookup endpoints and the requests sent to them.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::{Result, UrlhausError};

/// The URLhaus API base URL
pub const DEFAULT_BASE_URL: &str = "https://urlhaus-api.abuse.ch/v1/";

/// One remote lookup operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Information about a host (domain or IP)
    Host,
    /// Information about a single malware URL
    Url,
    /// Information about a payload (malware sample)
    Payload,
    /// URLs and payloads attributed to a malware signature
    Signature,
    /// URLs carrying a tag
    Tag,
}

impl Endpoint {
    /// All endpoints, in CLI order
    pub const ALL: [Self; 5] = [
        Self::Host,
        Self::Url,
        Self::Payload,
        Self::Signature,
        Self::Tag,
    ];

    /// Path relative to the API base
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Url => "url",
            Self::Payload => "payload",
            Self::Signature => "signature",
            Self::Tag => "tag",
        }
    }

    /// Largest record list the API returns for this endpoint, if documented
    #[must_use]
    pub const fn max_records(self) -> Option<u32> {
        match self {
            Self::Host | Self::Payload => Some(100),
            Self::Signature | Self::Tag => Some(1000),
            Self::Url => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Hash algorithm of a payload lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HashType {
    /// MD5 digest
    #[default]
    Md5,
    /// SHA-256 digest
    Sha256,
}

impl HashType {
    /// Form key the payload endpoint expects for this hash
    #[must_use]
    pub const fn form_key(self) -> &'static str {
        match self {
            Self::Md5 => "md5_hash",
            Self::Sha256 => "sha256_hash",
        }
    }
}

impl FromStr for HashType {
    type Err = UrlhausError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" => Ok(Self::Sha256),
            other => Err(UrlhausError::Config(format!(
                "unknown hash type: {other} (expected md5 or sha256)"
            ))),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5 => write!(f, "md5"),
            Self::Sha256 => write!(f, "sha256"),
        }
    }
}

/// A single lookup: the endpoint plus its one query value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Look up a host
    Host(String),
    /// Look up a URL
    Url(String),
    /// Look up a payload by hash
    Payload {
        /// Hex digest
        hash: String,
        /// Digest algorithm
        hash_type: HashType,
    },
    /// Look up a malware signature
    Signature(String),
    /// Look up a tag
    Tag(String),
}

impl Query {
    /// Endpoint this query is sent to
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Host(_) => Endpoint::Host,
            Self::Url(_) => Endpoint::Url,
            Self::Payload { .. } => Endpoint::Payload,
            Self::Signature(_) => Endpoint::Signature,
            Self::Tag(_) => Endpoint::Tag,
        }
    }

    /// Form key for the query value. Signature lookups share the `tag` key.
    #[must_use]
    pub const fn form_key(&self) -> &'static str {
        match self {
            Self::Host(_) => "host",
            Self::Url(_) => "url",
            Self::Payload { hash_type, .. } => hash_type.form_key(),
            Self::Signature(_) | Self::Tag(_) => "tag",
        }
    }

    /// The raw user-supplied value
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Host(v) | Self::Url(v) | Self::Signature(v) | Self::Tag(v) => v,
            Self::Payload { hash, .. } => hash,
        }
    }
}

/// Resolve an endpoint against the API base URL.
///
/// The endpoint path replaces the last segment of `base`, so a base of
/// `https://urlhaus-api.abuse.ch/v1/` gives `https://urlhaus-api.abuse.ch/v1/host`.
/// A base without a trailing slash is treated as a directory.
pub fn build_url(base: &str, endpoint: Endpoint) -> Result<Url> {
    let mut base = Url::parse(base)?;
    if base.cannot_be_a_base() {
        return Err(UrlhausError::InvalidUrl(format!(
            "{base} cannot be used as an API base"
        )));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    base.set_fragment(None);

    Ok(base.join(endpoint.path())?)
}

/// Build the `application/x-www-form-urlencoded` body for a query
#[must_use]
pub fn build_body(query: &Query) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair(query.form_key(), query.value())
        .finish()
}
