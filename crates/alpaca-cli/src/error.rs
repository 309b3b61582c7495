use alpaca_core::AnalysisError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] alpaca_core::ValidationError),

    #[error(transparent)]
    Analysis(AnalysisError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<AnalysisError> for CliError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::InvalidInput(validation) => Self::Validation(validation),
            other => Self::Analysis(other),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Serialization(_) => 4,
            Self::Analysis(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
