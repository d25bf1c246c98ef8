//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use std::io::IsTerminal;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use urlhaus_core::DEFAULT_BASE_URL;

use crate::config::Config;
use crate::output::OutputMode;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load configuration
    let config = Config::load()?;

    let output_mode = OutputMode::from_raw(cli.raw_output(config.raw));
    if cli.color_disabled(config.no_color) {
        colored::control::set_override(false);
    }

    // Flag or environment first, then config file, then the public API
    let api_url = cli
        .api_url
        .or(config.api_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Create context for commands
    let ctx = commands::Context {
        api_url,
        output_mode,
    };
    tracing::debug!(api_url = %ctx.api_url, mode = %ctx.output_mode, "starting lookup");

    // Dispatch to appropriate command
    match cli.command {
        Commands::Host(args) => commands::host::execute(ctx, args).await,
        Commands::Url(args) => commands::url::execute(ctx, args).await,
        Commands::Payload(args) => commands::payload::execute(ctx, args).await,
        Commands::Signature(args) => commands::signature::execute(ctx, args).await,
        Commands::Tag(args) => commands::tag::execute(ctx, args).await,
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}
