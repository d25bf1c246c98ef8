//! `urlhaus url` - Look up a malware URL and the payloads it served.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use urlhaus_core::{Query, QueryStatus, UrlInfo};

use super::Context;
use crate::cli::args::UrlArgs;
use crate::output::{tags, text, virustotal, Render};

pub async fn execute(ctx: Context, args: UrlArgs) -> Result<()> {
    super::lookup::<UrlInfo>(&ctx, Query::Url(args.url)).await
}

impl Render for UrlInfo {
    fn query_status(&self) -> &QueryStatus {
        &self.query_status
    }

    fn render_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", "URLhaus Information:".bold())?;
        writeln!(out, "  ID:         {}", text(self.id.as_ref()))?;
        writeln!(out, "  Reference:  {}", text(self.urlhaus_reference.as_ref()))?;
        writeln!(out, "  Date added: {}", text(self.date_added.as_ref()))?;
        writeln!(out, "  Reporter:   {}", text(self.reporter.as_ref()))?;
        writeln!(out, "  Tags:       {}", tags(&self.tags))?;
        writeln!(out)?;

        writeln!(out, "{}", "Malware URL Information:".bold())?;
        writeln!(out, "  Host:             {}", text(self.host.as_ref()))?;
        writeln!(out, "  Status:           {}", text(self.url_status.as_ref()))?;
        writeln!(out, "  Blacklist:")?;
        writeln!(out, "    * GSB:          {}", text(self.blacklists.gsb.as_ref()))?;
        writeln!(out, "    * SURBL:        {}", text(self.blacklists.surbl.as_ref()))?;
        writeln!(out, "    * Spamhaus DBL: {}", text(self.blacklists.spamhaus_dbl.as_ref()))?;
        writeln!(out)?;
        write!(out, "  Payload:")?;

        for payload in &self.payloads {
            writeln!(out)?;
            writeln!(out, "    * {}", text(payload.filename.as_ref()))?;
            writeln!(out, "      Download:   {}", text(payload.urlhaus_download.as_ref()))?;
            // Listed payloads always carry this line, even with no signature.
            writeln!(out, "      Signature:  {}", text(payload.signature.as_ref()))?;
            writeln!(out, "      Hash:")?;
            writeln!(out, "        - MD5:    {}", text(payload.response_md5.as_ref()))?;
            writeln!(out, "        - SHA256: {}", text(payload.response_sha256.as_ref()))?;
            virustotal(out, 6, payload.virustotal.as_ref())?;
        }

        writeln!(out)
    }
}
