//! # urlhaus-cli
//!
//! Command-line interface for the [URLhaus](https://urlhaus.abuse.ch) API.
//!
//! ## Features
//!
//! - **Lookups**: `host`, `url`, `payload`, `signature` and `tag`
//! - **Formatted summaries**: one fixed text layout per endpoint
//! - **Raw mode**: `--raw` prints the API response exactly as received

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
