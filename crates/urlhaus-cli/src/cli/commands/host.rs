//! `urlhaus host` - Look up the malware URLs observed on a host.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use urlhaus_core::{Endpoint, HostInfo, Query, QueryStatus};

use super::Context;
use crate::cli::args::HostArgs;
use crate::output::{cap, tags, text, Render};

pub async fn execute(ctx: Context, args: HostArgs) -> Result<()> {
    super::lookup::<HostInfo>(&ctx, Query::Host(args.host)).await
}

impl Render for HostInfo {
    fn query_status(&self) -> &QueryStatus {
        &self.query_status
    }

    fn render_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", "URLhaus Information:".bold())?;
        writeln!(out, "  Reference: {}", text(self.urlhaus_reference.as_ref()))?;
        writeln!(out, "  Blacklist:")?;
        writeln!(out, "    * SURBL:        {}", text(self.blacklists.surbl.as_ref()))?;
        writeln!(out, "    * Spamhaus DBL: {}", text(self.blacklists.spamhaus_dbl.as_ref()))?;
        writeln!(out)?;
        writeln!(out, "  First seen: {}", text(self.firstseen.as_ref()))?;
        writeln!(out, "  Number of URLs observation: {}", text(self.url_count.as_ref()))?;
        write!(out, "  List of URLs observed on this host{}:", cap(Endpoint::Host))?;

        for url in &self.urls {
            writeln!(out)?;
            writeln!(out, "    * Reference:  {}", text(url.urlhaus_reference.as_ref()))?;
            writeln!(out, "      Date added: {}", text(url.date_added.as_ref()))?;
            writeln!(out, "      Reporter:   {}", text(url.reporter.as_ref()))?;
            writeln!(out, "      Tags:       {}", tags(&url.tags))?;
        }

        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "query_status": "ok",
        "urlhaus_reference": "https://urlhaus.abuse.ch/host/vektorex.com/",
        "host": "vektorex.com",
        "firstseen": "2019-01-15 07:09:01 UTC",
        "url_count": "110",
        "blacklists": {"spamhaus_dbl": "abused_legit_malware", "surbl": "listed"},
        "urls": [{
            "id": "121319",
            "urlhaus_reference": "https://urlhaus.abuse.ch/url/121319/",
            "url": "http://vektorex.com/source/Z/5840187.exe",
            "url_status": "offline",
            "date_added": "2019-01-29 21:54:04 UTC",
            "threat": "malware_download",
            "reporter": "abuse_ch",
            "tags": ["AgentTesla", "exe"]
        }, {
            "id": "121320",
            "urlhaus_reference": "https://urlhaus.abuse.ch/url/121320/",
            "date_added": "2019-01-29 21:55:00 UTC",
            "reporter": "JayTHL",
            "tags": null
        }]
    }"#;

    fn render(json: &str) -> String {
        colored::control::set_override(false);
        let info: HostInfo = serde_json::from_str(json).unwrap();
        let mut out = Vec::new();
        info.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_host_layout() {
        let expected = concat!(
            "\
URLhaus Information:
  Reference: https://urlhaus.abuse.ch/host/vektorex.com/
  Blacklist:
    * SURBL:        listed
    * Spamhaus DBL: abused_legit_malware

  First seen: 2019-01-15 07:09:01 UTC
  Number of URLs observation: 110
  List of URLs observed on this host (max 100):
    * Reference:  https://urlhaus.abuse.ch/url/121319/
      Date added: 2019-01-29 21:54:04 UTC
      Reporter:   abuse_ch
      Tags:       AgentTesla,exe

    * Reference:  https://urlhaus.abuse.ch/url/121320/
      Date added: 2019-01-29 21:55:00 UTC
      Reporter:   JayTHL
",
            "      Tags:       \n",
            "\n",
        );
        assert_eq!(render(DOCUMENT), expected);
    }

    #[test]
    fn renders_empty_url_list() {
        let out = render(r#"{"query_status":"ok","url_count":"0","urls":[]}"#);
        assert!(out.ends_with("  List of URLs observed on this host (max 100):\n"));
        assert!(out.contains("  Number of URLs observation: 0\n"));
    }

    #[test]
    fn non_ok_prints_status_only() {
        assert_eq!(render(r#"{"query_status":"no_results"}"#), "no_results\n");
        assert_eq!(render(r#"{"query_status":"invalid_host"}"#), "invalid_host\n");
    }
}
