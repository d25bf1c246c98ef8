//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use urlhaus_core::HashType;

/// Command-line client for the URLhaus malware URL database
///
/// Look up hosts, URLs, payloads, signatures and tags tracked by
/// URLhaus (https://urlhaus.abuse.ch).
#[derive(Parser, Debug)]
#[command(name = "urlhaus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print the API response as received instead of a summary
    #[arg(short, long, global = true, overrides_with = "no_raw")]
    pub raw: bool,

    /// Print a summary even when the config file enables raw output
    #[arg(long, global = true, overrides_with = "raw")]
    pub no_raw: bool,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, overrides_with = "color")]
    pub no_color: bool,

    /// Allow colored output even when the config file disables it
    #[arg(long, global = true, overrides_with = "no_color")]
    pub color: bool,

    /// API base URL
    #[arg(long, env = "URLHAUS_API_URL", global = true, hide = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether raw output is on, given the config file default
    #[must_use]
    pub const fn raw_output(&self, configured: bool) -> bool {
        switch(self.raw, self.no_raw, configured)
    }

    /// Whether colour is off, given the config file default
    #[must_use]
    pub const fn color_disabled(&self, configured: bool) -> bool {
        switch(self.no_color, self.color, configured)
    }
}

/// A flag pair beats the configured value; the later flag of a pair wins.
const fn switch(on: bool, off: bool, configured: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        configured
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get information about a host
    Host(HostArgs),

    /// Get information about a URL
    Url(UrlArgs),

    /// Get information about a payload (malware sample)
    Payload(PayloadArgs),

    /// Get information about a signature (malware family)
    #[command(long_about = "Get information about a signature (malware family).\n\n\
        URLhaus tries to identify the malware family of a payload served by \
        malware URLs. Unlike tags, the signature is something the reporter of \
        the malware URL can not influence.")]
    Signature(SignatureArgs),

    /// Get information about a tag
    Tag(TagArgs),
}

// ============================================================================
// Lookup commands
// ============================================================================

#[derive(Args, Debug)]
pub struct HostArgs {
    /// Domain name or IP address to look up
    pub host: String,
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Full URL to look up
    pub url: String,
}

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Hash of the payload
    pub hash: String,

    /// The hash type of the payload
    #[arg(short = 't', long = "type", value_enum, default_value_t = HashTypeArg::Md5)]
    pub hash_type: HashTypeArg,
}

#[derive(Args, Debug)]
pub struct SignatureArgs {
    /// Malware family, e.g. Gozi
    pub signature: String,
}

#[derive(Args, Debug)]
pub struct TagArgs {
    /// Tag, e.g. Retefe
    pub tag: String,
}

/// Hash algorithms accepted by `payload --type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HashTypeArg {
    /// MD5 digest
    #[default]
    Md5,
    /// SHA-256 digest
    Sha256,
}

impl From<HashTypeArg> for HashType {
    fn from(arg: HashTypeArg) -> Self {
        match arg {
            HashTypeArg::Md5 => Self::Md5,
            HashTypeArg::Sha256 => Self::Sha256,
        }
    }
}
