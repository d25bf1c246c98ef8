//! `urlhaus tag` - Look up the URLs carrying a tag.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use urlhaus_core::{Endpoint, Query, QueryStatus, TagInfo};

use super::Context;
use crate::cli::args::TagArgs;
use crate::output::{cap, last_seen, text, Render};

pub async fn execute(ctx: Context, args: TagArgs) -> Result<()> {
    super::lookup::<TagInfo>(&ctx, Query::Tag(args.tag)).await
}

impl Render for TagInfo {
    fn query_status(&self) -> &QueryStatus {
        &self.query_status
    }

    fn render_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", "Malware Tag Information:".bold())?;
        writeln!(out, "  First seen: {}", text(self.firstseen.as_ref()))?;
        last_seen(out, 2, self.lastseen.as_ref())?;
        writeln!(out, "  Number of URLs observation: {}", text(self.url_count.as_ref()))?;
        writeln!(out)?;
        write!(
            out,
            "  List of malware URLs associated with this tag{}:",
            cap(Endpoint::Tag)
        )?;

        for url in &self.urls {
            writeln!(out)?;
            writeln!(out, "    * {}", text(url.url.as_ref()))?;
            writeln!(out, "      Status:       {}", text(url.url_status.as_ref()))?;
            writeln!(out, "      URLhaus:")?;
            writeln!(out, "        ID:         {}", text(url.url_id.as_ref()))?;
            writeln!(out, "        Reference:  {}", text(url.urlhaus_reference.as_ref()))?;
            writeln!(out, "        Date added: {}", text(url.dateadded.as_ref()))?;
            writeln!(out, "        Reporter:   {}", text(url.reporter.as_ref()))?;
        }

        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(json: &str) -> String {
        colored::control::set_override(false);
        let info: TagInfo = serde_json::from_str(json).unwrap();
        let mut out = Vec::new();
        info.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_tag_layout() {
        let json = r#"{
            "query_status": "ok",
            "firstseen": "2018-12-20 22:25:17 UTC",
            "lastseen": "2019-01-30 12:35:03 UTC",
            "url_count": "268",
            "urls": [{
                "url_id": "121555",
                "url": "http://wsdhfvdsjd.tk/1",
                "url_status": "online",
                "urlhaus_reference": "https://urlhaus.abuse.ch/url/121555/",
                "dateadded": "2019-01-30 12:35:03 UTC",
                "reporter": "abuse_ch",
                "threat": "malware_download"
            }, {
                "url_id": 121470,
                "url": "http://wsdhfvdsjd.tk/2",
                "url_status": "offline",
                "urlhaus_reference": "https://urlhaus.abuse.ch/url/121470/",
                "dateadded": "2019-01-30 08:11:48 UTC",
                "reporter": "Racco42"
            }]
        }"#;

        let expected = "\
Malware Tag Information:
  First seen: 2018-12-20 22:25:17 UTC
  Last seen:  2019-01-30 12:35:03 UTC
  Number of URLs observation: 268

  List of malware URLs associated with this tag (max 1000):
    * http://wsdhfvdsjd.tk/1
      Status:       online
      URLhaus:
        ID:         121555
        Reference:  https://urlhaus.abuse.ch/url/121555/
        Date added: 2019-01-30 12:35:03 UTC
        Reporter:   abuse_ch

    * http://wsdhfvdsjd.tk/2
      Status:       offline
      URLhaus:
        ID:         121470
        Reference:  https://urlhaus.abuse.ch/url/121470/
        Date added: 2019-01-30 08:11:48 UTC
        Reporter:   Racco42

";
        assert_eq!(render(json), expected);
    }

    #[test]
    fn non_ok_prints_status_only() {
        assert_eq!(render(r#"{"query_status":"invalid_tag"}"#), "invalid_tag\n");
        assert_eq!(render(r#"{"query_status":"no_results"}"#), "no_results\n");
    }
}
