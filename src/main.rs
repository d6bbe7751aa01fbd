//! zm - command-line client for Zammad
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `ZAMMAD_URL`: Base URL of your Zammad instance
//! - `ZAMMAD_TOKEN`: API access token
//!
//! # Usage
//!
//! ```bash
//! zm tickets search --state open --priority "3 high"
//! zm tickets get 42
//! zm users me
//! ```

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use zm::cli::Cli;
use zm::{commands, config, render, zammad_client};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // One line: "Error: <context>: <cause>"
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // stdout carries command output only
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zm=warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config = config::Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(base_url = %config.base_url, "Configuration loaded");

    let client =
        zammad_client::ZammadClient::new(&config).context("Failed to create Zammad client")?;

    let output = commands::run(&cli.command, &client)
        .await
        .map_err(|e| anyhow!(e.sanitized_display(client.token_for_sanitization())))
        .context(cli.command.failure_context())?;

    render::write_output(&mut std::io::stdout().lock(), &output)
        .context("Failed to write output")?;

    Ok(())
}
