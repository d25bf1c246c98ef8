//! Core types for the URLhaus API client.
//!
//! This crate provides the foundational pieces shared by the client and CLI:
//!
//! - **Queries**: [`Endpoint`], [`Query`] and [`HashType`], plus
//!   [`build_url`] and [`build_body`] which turn a query into the request
//!   the API expects
//! - **Types**: Typed representations of every lookup response
//! - **Errors**: [`UrlhausError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use urlhaus_core::{build_body, build_url, Endpoint, Query, DEFAULT_BASE_URL};
//!
//! let url = build_url(DEFAULT_BASE_URL, Endpoint::Host)?;
//! assert_eq!(url.as_str(), "https://urlhaus-api.abuse.ch/v1/host");
//! assert_eq!(build_body(&Query::Host("vektorex.com".into())), "host=vektorex.com");
//! ```

#![doc(html_root_url = "https://docs.rs/urlhaus-core/0.1.0")]

mod error;
mod query;
pub mod types;

pub use error::{Result, UrlhausError};
pub use query::{build_body, build_url, Endpoint, HashType, Query, DEFAULT_BASE_URL};
pub use types::*;
