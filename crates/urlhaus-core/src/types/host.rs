use serde::{Deserialize, Serialize};

use super::{de, Blacklists, QueryStatus};

/// Response of the `host` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    /// Lookup outcome
    pub query_status: QueryStatus,

    /// Link to the host's URLhaus page
    #[serde(default)]
    pub urlhaus_reference: Option<String>,

    /// The host that was queried
    #[serde(default)]
    pub host: Option<String>,

    /// First time URLhaus saw a malware URL on this host
    #[serde(default)]
    pub firstseen: Option<String>,

    /// Number of malware URLs observed on this host
    #[serde(default, deserialize_with = "de::scalar")]
    pub url_count: Option<String>,

    /// Blocklist verdicts
    #[serde(default, deserialize_with = "de::or_default")]
    pub blacklists: Blacklists,

    /// Malware URLs observed on this host (the API caps this at 100)
    #[serde(default, deserialize_with = "de::list")]
    pub urls: Vec<HostUrl>,
}

/// A malware URL observed on a host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostUrl {
    /// URLhaus URL identifier
    #[serde(default, deserialize_with = "de::scalar")]
    pub id: Option<String>,

    /// Link to the URL's URLhaus page
    #[serde(default)]
    pub urlhaus_reference: Option<String>,

    /// The malware URL
    #[serde(default)]
    pub url: Option<String>,

    /// `online`, `offline` or `unknown`
    #[serde(default)]
    pub url_status: Option<String>,

    /// When the URL was added to URLhaus
    #[serde(default)]
    pub date_added: Option<String>,

    /// Threat class, e.g. `malware_download`
    #[serde(default)]
    pub threat: Option<String>,

    /// Twitter handle of the reporter
    #[serde(default)]
    pub reporter: Option<String>,

    /// Tags attached to the URL
    #[serde(default, deserialize_with = "de::list")]
    pub tags: Vec<String>,
}
