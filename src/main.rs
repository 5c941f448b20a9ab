use anyhow::{Context, Result};
use clap::Parser;
use recommender::cli::{handle_command, Cli};
use std::fs::OpenOptions;
use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to a file so stdout only carries results
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&cli.log_file)
        .with_context(|| format!("Failed to open log file {}", cli.log_file.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting recommender {}", env!("CARGO_PKG_VERSION"));

    let ok = handle_command(cli.command).await?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
