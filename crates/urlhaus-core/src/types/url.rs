use serde::{Deserialize, Serialize};

use super::{de, Blacklists, QueryStatus, VirusTotal};

/// Response of the `url` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlInfo {
    /// Lookup outcome
    pub query_status: QueryStatus,

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

    /// Host part of the URL
    #[serde(default)]
    pub host: Option<String>,

    /// When the URL was added to URLhaus
    #[serde(default)]
    pub date_added: Option<String>,

    /// Threat class, e.g. `malware_download`
    #[serde(default)]
    pub threat: Option<String>,

    /// Blocklist verdicts
    #[serde(default, deserialize_with = "de::or_default")]
    pub blacklists: Blacklists,

    /// Twitter handle of the reporter
    #[serde(default)]
    pub reporter: Option<String>,

    /// Tags attached to the URL
    #[serde(default, deserialize_with = "de::list")]
    pub tags: Vec<String>,

    /// Payloads served by the URL
    #[serde(default, deserialize_with = "de::list")]
    pub payloads: Vec<UrlPayload>,
}

/// A payload retrieved from a malware URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlPayload {
    /// When the payload was first retrieved from this URL
    #[serde(default)]
    pub firstseen: Option<String>,

    /// File name the server offered
    #[serde(default)]
    pub filename: Option<String>,

    /// File type, e.g. `exe`
    #[serde(default)]
    pub file_type: Option<String>,

    /// Size in bytes
    #[serde(default, deserialize_with = "de::scalar")]
    pub response_size: Option<String>,

    /// MD5 of the payload
    #[serde(default)]
    pub response_md5: Option<String>,

    /// SHA-256 of the payload
    #[serde(default)]
    pub response_sha256: Option<String>,

    /// Sample download link
    #[serde(default)]
    pub urlhaus_download: Option<String>,

    /// Malware family
    #[serde(default)]
    pub signature: Option<String>,

    /// VirusTotal summary, if the sample is known there
    #[serde(default)]
    pub virustotal: Option<VirusTotal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_document() {
        let json = r#"{
            "query_status": "ok",
            "id": "105821",
            "urlhaus_reference": "https://urlhaus.abuse.ch/url/105821/",
            "url": "http://sskymedia.com/VMYB-ht_JAQo-gi/INV/99401FORPO/20673114777/US/Outstanding-Invoices/",
            "url_status": "offline",
            "host": "sskymedia.com",
            "date_added": "2019-01-19 01:33:26 UTC",
            "threat": "malware_download",
            "blacklists": {"gsb": "not listed", "surbl": "not listed", "spamhaus_dbl": "not listed"},
            "reporter": "Cryptolaemus1",
            "larted": "true",
            "tags": ["emotet", "epoch2", "heodo"],
            "payloads": [{
                "firstseen": "2019-01-19",
                "filename": "676860772178.doc",
                "file_type": "doc",
                "response_size": "172752",
                "response_md5": "3c2a5b4c6d7e",
                "response_sha256": "ba53b23b3fb2",
                "urlhaus_download": "https://urlhaus-api.abuse.ch/v1/download/ba53b23b3fb2/",
                "signature": "Heodo",
                "virustotal": {"result": "18 / 58", "percent": "31.03", "link": "https://www.virustotal.com/file/ba53/analysis/"}
            }, {
                "filename": null,
                "file_type": "exe",
                "response_size": 1024,
                "signature": null,
                "virustotal": null
            }]
        }"#;

        let info: UrlInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.blacklists.gsb.as_deref(), Some("not listed"));
        assert_eq!(info.payloads.len(), 2);
        assert_eq!(
            info.payloads[0].virustotal.as_ref().and_then(|vt| vt.percent.as_deref()),
            Some("31.03")
        );
        assert_eq!(info.payloads[1].response_size.as_deref(), Some("1024"));
        assert!(info.payloads[1].virustotal.is_none());
        assert!(info.payloads[1].signature.is_none());
    }

    #[test]
    fn null_blacklists_parse_as_empty() {
        let info: UrlInfo =
            serde_json::from_str(r#"{"query_status":"ok","blacklists":null}"#).unwrap();
        assert!(info.blacklists.gsb.is_none());
        assert!(info.blacklists.surbl.is_none());
        assert!(info.blacklists.spamhaus_dbl.is_none());
    }
}
