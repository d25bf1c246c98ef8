use serde::{Deserialize, Serialize};

use super::{de, QueryStatus, VirusTotal};

/// Response of the `payload` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadInfo {
    /// Lookup outcome
    pub query_status: QueryStatus,

    /// MD5 of the sample
    #[serde(default)]
    pub md5_hash: Option<String>,

    /// SHA-256 of the sample
    #[serde(default)]
    pub sha256_hash: Option<String>,

    /// File type, e.g. `exe`
    #[serde(default)]
    pub file_type: Option<String>,

    /// Size in bytes
    #[serde(default, deserialize_with = "de::scalar")]
    pub file_size: Option<String>,

    /// Malware family, when identified
    #[serde(default)]
    pub signature: Option<String>,

    /// First time the sample was seen
    #[serde(default)]
    pub firstseen: Option<String>,

    /// Last time the sample was seen
    #[serde(default)]
    pub lastseen: Option<String>,

    /// Number of URLs that served the sample
    #[serde(default, deserialize_with = "de::scalar")]
    pub url_count: Option<String>,

    /// Link to the sample's URLhaus page
    #[serde(default)]
    pub urlhaus_reference: Option<String>,

    /// Sample download link
    #[serde(default)]
    pub urlhaus_download: Option<String>,

    /// VirusTotal summary, if the sample is known there
    #[serde(default)]
    pub virustotal: Option<VirusTotal>,

    /// URLs that served the sample (the API caps this at 100)
    #[serde(default, deserialize_with = "de::list")]
    pub urls: Vec<PayloadUrl>,
}

/// A malware URL that served a payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadUrl {
    /// URLhaus URL identifier
    #[serde(default, deserialize_with = "de::scalar")]
    pub url_id: Option<String>,

    /// The malware URL
    #[serde(default)]
    pub url: Option<String>,

    /// `online`, `offline` or `unknown`
    #[serde(default)]
    pub url_status: Option<String>,

    /// Link to the URL's URLhaus page
    #[serde(default)]
    pub urlhaus_reference: Option<String>,

    /// File name the server offered
    #[serde(default)]
    pub filename: Option<String>,

    /// First time the URL served this payload
    #[serde(default)]
    pub firstseen: Option<String>,

    /// Last time the URL served this payload
    #[serde(default)]
    pub lastseen: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payload_document() {
        let json = r#"{
            "query_status": "ok",
            "md5_hash": "12c8aec5766ac3e6f26f2505e2f4a8f2",
            "sha256_hash": "01fa56184fcaa42b6ee1882787a34098c79898c182814774fd81dc18a6af0b00",
            "file_type": "exe",
            "file_size": 176128,
            "signature": null,
            "firstseen": "2019-01-19 01:33:26",
            "lastseen": null,
            "url_count": "1",
            "urlhaus_download": "https://urlhaus-api.abuse.ch/v1/download/01fa5618/",
            "virustotal": null,
            "urls": [{
                "url_id": "105821",
                "url": "http://sskymedia.com/VMYB-ht_JAQo-gi/",
                "url_status": "offline",
                "urlhaus_reference": "https://urlhaus.abuse.ch/url/105821/",
                "filename": "676860772178.doc",
                "firstseen": "2019-01-19",
                "lastseen": null
            }]
        }"#;

        let info: PayloadInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.file_size.as_deref(), Some("176128"));
        assert!(info.signature.is_none());
        assert!(info.virustotal.is_none());
        assert_eq!(info.urls[0].url_id.as_deref(), Some("105821"));
        assert!(info.urls[0].lastseen.is_none());
    }
}
