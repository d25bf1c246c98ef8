use serde::{Deserialize, Serialize};

use super::{de, QueryStatus};

/// Response of the `tag` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInfo {
    /// Lookup outcome
    pub query_status: QueryStatus,

    /// First time the tag was used
    #[serde(default)]
    pub firstseen: Option<String>,

    /// Last time the tag was used
    #[serde(default)]
    pub lastseen: Option<String>,

    /// Number of URLs carrying the tag
    #[serde(default, deserialize_with = "de::scalar")]
    pub url_count: Option<String>,

    /// URLs carrying the tag (the API caps this at 1000)
    #[serde(default, deserialize_with = "de::list")]
    pub urls: Vec<TagUrl>,
}

/// A malware URL carrying a tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagUrl {
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

    /// When the URL was added to URLhaus
    #[serde(default)]
    pub dateadded: Option<String>,

    /// Twitter handle of the reporter
    #[serde(default)]
    pub reporter: Option<String>,

    /// Threat class, e.g. `malware_download`
    #[serde(default)]
    pub threat: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tag_document_with_numeric_counts() {
        let json = r#"{
            "query_status": "ok",
            "firstseen": "2018-12-20 22:25:17 UTC",
            "lastseen": "2019-01-30 12:35:03 UTC",
            "url_count": 268,
            "urls": [{
                "url_id": 121555,
                "url": "http://wsdhfvdsjd.tk/1",
                "url_status": "online",
                "urlhaus_reference": "https://urlhaus.abuse.ch/url/121555/",
                "dateadded": "2019-01-30 12:35:03 UTC",
                "reporter": "abuse_ch",
                "threat": "malware_download"
            }]
        }"#;

        let info: TagInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.url_count.as_deref(), Some("268"));
        assert_eq!(info.urls[0].url_id.as_deref(), Some("121555"));
        assert_eq!(info.urls[0].dateadded.as_deref(), Some("2019-01-30 12:35:03 UTC"));
    }

    #[test]
    fn unknown_status_passes_through() {
        let info: TagInfo = serde_json::from_str(r#"{"query_status":"invalid_tag"}"#).unwrap();
        assert_eq!(info.query_status, QueryStatus::InvalidTag);
        assert_eq!(info.query_status.to_string(), "invalid_tag");
    }
}
