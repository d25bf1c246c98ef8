//! `urlhaus signature` - Look up the URLs serving a malware family.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use urlhaus_core::{Endpoint, Query, QueryStatus, SignatureInfo};

use super::Context;
use crate::cli::args::SignatureArgs;
use crate::output::{cap, last_seen, text, virustotal, Render};

pub async fn execute(ctx: Context, args: SignatureArgs) -> Result<()> {
    super::lookup::<SignatureInfo>(&ctx, Query::Signature(args.signature)).await
}

impl Render for SignatureInfo {
    fn query_status(&self) -> &QueryStatus {
        &self.query_status
    }

    fn render_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", "Malware Signature Information:".bold())?;
        writeln!(out, "  First seen: {}", text(self.firstseen.as_ref()))?;
        last_seen(out, 2, self.lastseen.as_ref())?;
        writeln!(out, "  Number of URLs observation:     {}", text(self.url_count.as_ref()))?;
        writeln!(out, "  Number of Payloads observation: {}", text(self.payload_count.as_ref()))?;
        writeln!(out)?;
        write!(
            out,
            "  List of malware URLs associated with this signature{}:",
            cap(Endpoint::Signature)
        )?;

        for url in &self.urls {
            writeln!(out)?;
            writeln!(out, "    * {}", text(url.url.as_ref()))?;
            writeln!(out, "      Status:     {}", text(url.url_status.as_ref()))?;
            writeln!(out, "      First seen: {}", text(url.firstseen.as_ref()))?;
            last_seen(out, 6, url.lastseen.as_ref())?;
            writeln!(out, "      Type:       {}", text(url.file_type.as_ref()))?;
            writeln!(out, "      Size:       {}", text(url.file_size.as_ref()))?;
            writeln!(out, "      Hash:")?;
            writeln!(out, "        MD5:      {}", text(url.md5_hash.as_ref()))?;
            writeln!(out, "        SHA256:   {}", text(url.sha256_hash.as_ref()))?;
            writeln!(out, "      URLhaus:")?;
            writeln!(out, "        ID:         {}", text(url.url_id.as_ref()))?;
            writeln!(out, "        Reference:  {}", text(url.urlhaus_reference.as_ref()))?;
            virustotal(out, 8, url.virustotal.as_ref())?;
            writeln!(out, "        Sample download: {}", text(url.urlhaus_download.as_ref()))?;
        }

        writeln!(out)
    }
}
