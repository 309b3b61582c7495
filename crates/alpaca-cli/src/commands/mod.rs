mod analyze;

pub use analyze::AnalysisReport;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<AnalysisReport, CliError> {
    match &cli.command {
        Command::Analyze(args) => analyze::run(args, cli.mock, cli.timeout_ms).await,
    }
}
