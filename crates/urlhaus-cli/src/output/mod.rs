//! Output modes and the shared pieces of the text layouts.

use std::io::{self, Write};

use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use tracing::debug;
use urlhaus_core::{present, Endpoint, QueryStatus, VirusTotal};

/// How a response body reaches stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Parse the document and print the endpoint's summary
    #[default]
    Rendered,
    /// Print the body exactly as received
    Raw,
}

impl OutputMode {
    /// Pick the mode from the raw-output switch.
    pub const fn from_raw(raw: bool) -> Self {
        if raw {
            Self::Raw
        } else {
            Self::Rendered
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rendered => write!(f, "rendered"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

/// A response document with a text layout.
pub trait Render {
    /// Status the API reported for the lookup.
    fn query_status(&self) -> &QueryStatus;

    /// Write the layout of a successful lookup.
    fn render_details(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Write the layout, or the bare status when the lookup was not `ok`.
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        let status = self.query_status();
        if status.is_ok() {
            self.render_details(out)
        } else {
            writeln!(out, "{status}")
        }
    }
}

/// Write a response body to `out` according to `mode`.
///
/// An empty body prints nothing.
pub fn emit<T>(out: &mut dyn Write, body: &[u8], mode: OutputMode) -> Result<()>
where
    T: DeserializeOwned + Render,
{
    if body.is_empty() {
        debug!("empty response body, nothing to print");
        return Ok(());
    }

    match mode {
        OutputMode::Raw => out.write_all(body).context("failed to write response")?,
        OutputMode::Rendered => {
            let document: T =
                serde_json::from_slice(body).context("failed to parse URLhaus response")?;
            document
                .render(out)
                .context("failed to write formatted response")?;
        }
    }

    Ok(())
}

/// Field value, empty when absent.
pub(crate) fn text(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

/// Tag list as the API shows it: comma-joined, no spaces.
pub(crate) fn tags(list: &[String]) -> String {
    list.join(",")
}

/// The API-side cap on record lists, as shown in list headings.
pub(crate) fn cap(endpoint: Endpoint) -> String {
    endpoint
        .max_records()
        .map(|max| format!(" (max {max})"))
        .unwrap_or_default()
}

/// Optional `Last seen` line; `indent` is the column of the label.
pub(crate) fn last_seen(out: &mut dyn Write, indent: usize, value: Option<&String>) -> io::Result<()> {
    if let Some(seen) = present(value) {
        writeln!(out, "{:indent$}Last seen:  {seen}", "")?;
    }
    Ok(())
}

/// Optional VirusTotal block; `indent` is the column of the label.
pub(crate) fn virustotal(out: &mut dyn Write, indent: usize, vt: Option<&VirusTotal>) -> io::Result<()> {
    if let Some(vt) = vt {
        writeln!(
            out,
            "{:indent$}VirusTotal: {}% ({})",
            "",
            text(vt.percent.as_ref()),
            text(vt.result.as_ref())
        )?;
        writeln!(out, "{:indent$}  Link:     {}", "", text(vt.link.as_ref()))?;
    }
    Ok(())
}
