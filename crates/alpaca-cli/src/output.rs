use std::io::{self, Write};

use alpaca_core::format_date;

use crate::cli::OutputFormat;
use crate::commands::AnalysisReport;
use crate::error::CliError;

pub fn render(report: &AnalysisReport, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => write_table(&mut out, report)?,
    }

    Ok(())
}

fn write_table(out: &mut impl Write, report: &AnalysisReport) -> Result<(), CliError> {
    if report.is_no_data() {
        writeln!(out, "No data found for {}", report.symbol)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} vs {}  {} .. {}",
        report.symbol,
        report.benchmark,
        format_date(report.range.start()),
        format_date(report.range.end()),
    )?;
    if report.range_corrected {
        writeln!(out, "note        : date range was invalid; showing the trailing 365 days")?;
    }

    if let Some(position) = &report.position {
        writeln!(out)?;
        writeln!(out, "Performance")?;
        writeln!(
            out,
            "  current value : ${:.2} ({} shares)",
            position.current_value, position.shares
        )?;
        writeln!(
            out,
            "  net P/L       : {}${:.2} ({:+.2}%)",
            if position.net_profit < 0.0 { "-" } else { "+" },
            position.net_profit.abs(),
            position.percent_change
        )?;
        writeln!(out, "  share price   : ${:.2}", position.last_close)?;
    }

    writeln!(out)?;
    writeln!(out, "Risk profile")?;
    match (&report.metrics, report.beta_band) {
        (Some(metrics), Some(band)) => {
            writeln!(out, "  beta          : {:.2} ({band})", metrics.beta)?;
            writeln!(out, "  volatility    : {:.2}% annual", metrics.volatility)?;
            writeln!(out, "  sharpe        : {:.2}", metrics.sharpe)?;
        }
        _ => writeln!(out, "  not enough overlapping data with {}", report.benchmark)?,
    }

    writeln!(out)?;
    writeln!(out, "News")?;
    if report.news.is_empty() {
        writeln!(out, "  No news found.")?;
    }
    for item in &report.news {
        writeln!(out, "  - {} ({})", item.title, item.publisher)?;
        writeln!(out, "    {}", item.link)?;
    }

    Ok(())
}
