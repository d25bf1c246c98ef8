use serde::{Deserialize, Serialize};

use super::{de, QueryStatus, VirusTotal};

/// Response of the `signature` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureInfo {
    /// Lookup outcome
    pub query_status: QueryStatus,

    /// First time the signature was seen
    #[serde(default)]
    pub firstseen: Option<String>,

    /// Last time the signature was seen
    #[serde(default)]
    pub lastseen: Option<String>,

    /// Number of URLs serving this malware family
    #[serde(default, deserialize_with = "de::scalar")]
    pub url_count: Option<String>,

    /// Number of payloads attributed to this malware family
    #[serde(default, deserialize_with = "de::scalar")]
    pub payload_count: Option<String>,

    /// URLs serving this malware family (the API caps this at 1000)
    #[serde(default, deserialize_with = "de::list")]
    pub urls: Vec<SignatureUrl>,
}

/// A malware URL serving a payload of the signature's family
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureUrl {
    /// URLhaus URL identifier
    #[serde(default, deserialize_with = "de::scalar")]
    pub url_id: Option<String>,

    /// The malware URL
    #[serde(default)]
    pub url: Option<String>,

    /// `online`, `offline` or `unknown`
    #[serde(default)]
    pub url_status: Option<String>,

    /// First time the URL was seen
    #[serde(default)]
    pub firstseen: Option<String>,

    /// Last time the URL was seen
    #[serde(default)]
    pub lastseen: Option<String>,

    /// File type of the payload
    #[serde(default)]
    pub file_type: Option<String>,

    /// Size of the payload in bytes
    #[serde(default, deserialize_with = "de::scalar")]
    pub file_size: Option<String>,

    /// MD5 of the payload
    #[serde(default)]
    pub md5_hash: Option<String>,

    /// SHA-256 of the payload
    #[serde(default)]
    pub sha256_hash: Option<String>,

    /// VirusTotal summary, if the payload is known there
    #[serde(default)]
    pub virustotal: Option<VirusTotal>,

    /// Link to the URL's URLhaus page
    #[serde(default)]
    pub urlhaus_reference: Option<String>,

    /// Sample download link
    #[serde(default)]
    pub urlhaus_download: Option<String>,
}
