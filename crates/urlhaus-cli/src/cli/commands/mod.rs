//! Command implementations, one per lookup endpoint.

pub mod host;
pub mod payload;
pub mod signature;
pub mod tag;
pub mod url;

use std::io::{self, Write};

use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use urlhaus_client::UrlhausClient;
use urlhaus_core::Query;

use crate::output::{emit, OutputMode, Render};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// API base URL
    pub api_url: String,

    /// Raw or rendered output
    pub output_mode: OutputMode,
}

impl Context {
    /// Create a URLhaus client for the configured API.
    pub fn client(&self) -> Result<UrlhausClient> {
        UrlhausClient::builder()
            .base_url(&self.api_url)
            .build()
            .with_context(|| format!("cannot use API URL {}", self.api_url))
    }
}

/// Send `query` and print the response as document type `T`.
pub(crate) async fn lookup<T>(ctx: &Context, query: Query) -> Result<()>
where
    T: DeserializeOwned + Render,
{
    let client = ctx.client()?;
    let body = client
        .fetch(&query)
        .await
        .with_context(|| format!("{} lookup failed", query.endpoint()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit::<T>(&mut out, &body, ctx.output_mode)?;
    out.flush().context("failed to write response")?;

    Ok(())
}
