//! CLI argument definitions for alpaca.
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--mock` | `false` | Serve deterministic offline data |
//! | `--timeout-ms` | `15000` | Budget for each provider fetch |
//!
//! # Examples
//!
//! ```bash
//! alpaca analyze TSLA
//! alpaca analyze AAPL --start 2024-01-01 --end 2024-07-01 --shares 25
//! alpaca --format json --pretty analyze ^NDX
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use time::Date;

/// Single-security risk report: position value, beta, volatility, Sharpe and headlines.
#[derive(Debug, Parser)]
#[command(name = "alpaca", author, version, about)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Use deterministic offline data instead of Yahoo Finance.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Budget for each provider fetch in milliseconds.
    #[arg(long, global = true, default_value_t = 15_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Table,
    /// Single JSON object.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyse one ticker against the S&P 500.
    ///
    /// Missing or inverted dates fall back to the trailing 365 days.
    ///
    /// # Examples
    ///
    ///   alpaca analyze TSLA
    ///   alpaca analyze MSFT --start 2024-01-01 --end 2024-12-31
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Ticker symbol, e.g. TSLA, BRK-B or ^NDX.
    pub ticker: String,

    /// First day of the window (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date_arg)]
    pub start: Option<Date>,

    /// Day after the last day of the window (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date_arg)]
    pub end: Option<Date>,

    /// Shares held, for position value and P/L.
    #[arg(long, default_value_t = 10.0, value_parser = parse_shares)]
    pub shares: f64,
}

fn parse_date_arg(raw: &str) -> Result<Date, String> {
    alpaca_core::parse_date(raw).map_err(|error| error.to_string())
}

fn parse_shares(raw: &str) -> Result<f64, String> {
    let shares: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !shares.is_finite() || shares < 0.01 {
        return Err(String::from("shares must be at least 0.01"));
    }
    Ok(shares)
}
