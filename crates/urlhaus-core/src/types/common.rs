use serde::{Deserialize, Serialize};
use std::fmt;

use super::de;

/// Outcome of a lookup as reported by the API.
///
/// Anything other than `ok` is passed through opaquely; the known values
/// are only named for convenience.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueryStatus {
    /// The lookup matched and the document carries details
    Ok,
    /// Nothing is known about the queried value
    NoResults,
    /// The queried value is not a valid URL
    InvalidUrl,
    /// The queried value is not a valid host
    InvalidHost,
    /// The queried value is not a valid tag
    InvalidTag,
    /// The queried value is not a valid signature
    InvalidSignature,
    /// The queried hash is not a known payload
    NoMalware,
    /// Any other status string
    Other(String),
}

impl QueryStatus {
    /// Returns true if the document carries lookup details
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// The status exactly as the API spelled it
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "ok",
            Self::NoResults => "no_results",
            Self::InvalidUrl => "invalid_url",
            Self::InvalidHost => "invalid_host",
            Self::InvalidTag => "invalid_tag",
            Self::InvalidSignature => "invalid_signature",
            Self::NoMalware => "no_malware",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for QueryStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ok" => Self::Ok,
            "no_results" => Self::NoResults,
            "invalid_url" => Self::InvalidUrl,
            "invalid_host" => Self::InvalidHost,
            "invalid_tag" => Self::InvalidTag,
            "invalid_signature" => Self::InvalidSignature,
            "no_malware" => Self::NoMalware,
            _ => Self::Other(s),
        }
    }
}

impl From<QueryStatus> for String {
    fn from(status: QueryStatus) -> Self {
        match status {
            QueryStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blocklist verdicts for a host or URL (`"listed"`, `"not listed"`, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Blacklists {
    /// Google Safe Browsing (URL lookups only)
    #[serde(default)]
    pub gsb: Option<String>,

    /// SURBL
    #[serde(default)]
    pub surbl: Option<String>,

    /// Spamhaus Domain Block List
    #[serde(default)]
    pub spamhaus_dbl: Option<String>,
}

/// VirusTotal summary attached to a payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VirusTotal {
    /// Detection ratio, e.g. `"18 / 66"`
    #[serde(default, deserialize_with = "de::scalar")]
    pub result: Option<String>,

    /// Detection percentage
    #[serde(default, deserialize_with = "de::scalar")]
    pub percent: Option<String>,

    /// Link to the VirusTotal report
    #[serde(default)]
    pub link: Option<String>,
}

/// Returns the value if it is present and non-empty.
///
/// Mirrors how the API signals "not available" for optional fields: either
/// the key is missing, `null`, or an empty string.
#[must_use]
pub fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}
