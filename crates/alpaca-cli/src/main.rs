mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

/// Exit code for a ticker the provider has no prices for.
const NO_DATA_EXIT_CODE: u8 = 3;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_tracing() {
    // Logs go to stderr so JSON on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    let report = commands::run(&cli).await?;
    output::render(&report, cli.format, cli.pretty)?;

    if report.is_no_data() {
        tracing::info!(symbol = %report.symbol, "no price data");
        return Ok(ExitCode::from(NO_DATA_EXIT_CODE));
    }

    Ok(ExitCode::SUCCESS)
}
