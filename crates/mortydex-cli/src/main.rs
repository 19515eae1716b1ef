//! mortydex - Browse Rick and Morty characters with local edits.
//!
//! A thin terminal front-end over `mortydex-core`: the remote catalog is
//! read through `mortydex-http`, user-authored characters are kept by
//! `mortydex-file`.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let config = config::Config::from_cli(&cli)?;
    commands::handle(cli.command, &config).await
}

/// All log output goes to stderr.
fn init_logging(verbosity: u8, json: bool) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (json_layer, text_layer) = if json {
        (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
    } else {
        let text = fmt::layer().with_target(false).with_writer(std::io::stderr);
        (None, Some(text))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
