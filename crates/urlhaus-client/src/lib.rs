//! HTTP client for the URLhaus API.
//!
//! This crate provides [`UrlhausClient`], which posts one form-encoded lookup
//! per call and returns either the raw response body ([`UrlhausClient::fetch`])
//! or the decoded document ([`UrlhausClient::host`], [`UrlhausClient::url`], ...).
//!
//! # Example
//!
//! ```rust,ignore
//! use urlhaus_client::UrlhausClient;
//!
//! let client = UrlhausClient::new()?;
//! if let Some(host) = client.host("vektorex.com").await? {
//!     println!("{}: {:?} URLs", host.query_status, host.url_count);
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/urlhaus-client/0.1.0")]

mod client;

pub use client::{UrlhausClient, UrlhausClientBuilder};
pub use urlhaus_core::{Result, UrlhausError};
