//! `urlhaus payload` - Look up a malware sample by hash.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use urlhaus_core::{present, Endpoint, PayloadInfo, Query, QueryStatus};

use super::Context;
use crate::cli::args::PayloadArgs;
use crate::output::{cap, last_seen, text, virustotal, Render};

pub async fn execute(ctx: Context, args: PayloadArgs) -> Result<()> {
    let query = Query::Payload {
        hash: args.hash,
        hash_type: args.hash_type.into(),
    };
    super::lookup::<PayloadInfo>(&ctx, query).await
}

impl Render for PayloadInfo {
    fn query_status(&self) -> &QueryStatus {
        &self.query_status
    }

    fn render_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", "Malware Payload Information:".bold())?;
        writeln!(out, "  Type: {}", text(self.file_type.as_ref()))?;
        writeln!(out, "  Size: {}", text(self.file_size.as_ref()))?;
        writeln!(out, "  Hash:")?;
        writeln!(out, "    - MD5:    {}", text(self.md5_hash.as_ref()))?;
        writeln!(out, "    - SHA256: {}", text(self.sha256_hash.as_ref()))?;
        writeln!(out)?;

        if let Some(signature) = present(self.signature.as_ref()) {
            writeln!(out, "  Signature:  {signature}")?;
        }
        writeln!(out, "  First seen: {}", text(self.firstseen.as_ref()))?;
        last_seen(out, 2, self.lastseen.as_ref())?;
        writeln!(out, "  Number of URLs observation: {}", text(self.url_count.as_ref()))?;
        writeln!(out, "  URLhaus reference: {}", text(self.urlhaus_reference.as_ref()))?;
        writeln!(out, "  Sample download: {}", text(self.urlhaus_download.as_ref()))?;
        virustotal(out, 2, self.virustotal.as_ref())?;
        writeln!(out)?;
        write!(
            out,
            "  List of malware URLs associated with this payload{}:",
            cap(Endpoint::Payload)
        )?;

        for url in &self.urls {
            writeln!(out)?;
            writeln!(out, "    * {}", text(url.url.as_ref()))?;
            writeln!(out, "      Status:       {}", text(url.url_status.as_ref()))?;
            writeln!(out, "      URLhaus:")?;
            writeln!(out, "        Reference:  {}", text(url.urlhaus_reference.as_ref()))?;
            writeln!(out, "        First seen: {}", text(url.firstseen.as_ref()))?;
            last_seen(out, 8, url.lastseen.as_ref())?;
        }

        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(json: &str) -> String {
        colored::control::set_override(false);
        let info: PayloadInfo = serde_json::from_str(json).unwrap();
        let mut out = Vec::new();
        info.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_payload_layout_with_optional_fields() {
        let json = r#"{
            "query_status": "ok",
            "md5_hash": "12c8aec5766ac3e6f26f2505e2f4a8f2",
            "sha256_hash": "01fa56184fcaa42b6ee1882787a34098",
            "file_type": "exe",
            "file_size": "176128",
            "signature": "Gozi",
            "firstseen": "2019-01-19 01:33:26",
            "lastseen": "2019-01-20 10:00:00",
            "url_count": "2",
            "urlhaus_reference": "https://urlhaus.abuse.ch/browse.php?search=01fa5618",
            "urlhaus_download": "https://urlhaus-api.abuse.ch/v1/download/01fa5618/",
            "virustotal": {"result": "40 / 69", "percent": "57.97", "link": "https://www.virustotal.com/file/01fa/analysis/"},
            "urls": [{
                "url_id": "105821",
                "url": "http://sskymedia.com/VMYB-ht_JAQo-gi/",
                "url_status": "offline",
                "urlhaus_reference": "https://urlhaus.abuse.ch/url/105821/",
                "filename": "676860772178.doc",
                "firstseen": "2019-01-19",
                "lastseen": "2019-01-20"
            }, {
                "url_id": "105822",
                "url": "http://example.test/b.exe",
                "url_status": "online",
                "urlhaus_reference": "https://urlhaus.abuse.ch/url/105822/",
                "firstseen": "2019-01-20",
                "lastseen": null
            }]
        }"#;

        let expected = "\
Malware Payload Information:
  Type: exe
  Size: 176128
  Hash:
    - MD5:    12c8aec5766ac3e6f26f2505e2f4a8f2
    - SHA256: 01fa56184fcaa42b6ee1882787a34098

  Signature:  Gozi
  First seen: 2019-01-19 01:33:26
  Last seen:  2019-01-20 10:00:00
  Number of URLs observation: 2
  URLhaus reference: https://urlhaus.abuse.ch/browse.php?search=01fa5618
  Sample download: https://urlhaus-api.abuse.ch/v1/download/01fa5618/
  VirusTotal: 57.97% (40 / 69)
    Link:     https://www.virustotal.com/file/01fa/analysis/

  List of malware URLs associated with this payload (max 100):
    * http://sskymedia.com/VMYB-ht_JAQo-gi/
      Status:       offline
      URLhaus:
        Reference:  https://urlhaus.abuse.ch/url/105821/
        First seen: 2019-01-19
        Last seen:  2019-01-20

    * http://example.test/b.exe
      Status:       online
      URLhaus:
        Reference:  https://urlhaus.abuse.ch/url/105822/
        First seen: 2019-01-20

";
        assert_eq!(render(json), expected);
    }

    #[test]
    fn absent_optional_fields_are_skipped() {
        let out = render(
            r#"{"query_status":"ok","file_type":"exe","signature":null,"lastseen":"","virustotal":null,"firstseen":"2019-01-19","urls":null}"#,
        );
        assert!(!out.contains("Signature"));
        assert!(!out.contains("Last seen"));
        assert!(!out.contains("VirusTotal"));
        assert!(out.contains("  Hash:\n    - MD5:    \n    - SHA256: \n\n  First seen: 2019-01-19\n"));
        assert!(out.ends_with(
            "  Sample download: \n\n  List of malware URLs associated with this payload (max 100):\n"
        ));
    }

    #[test]
    fn non_ok_prints_status_only() {
        assert_eq!(render(r#"{"query_status":"no_malware"}"#), "no_malware\n");
    }
}
