//! CLI-specific error types and exit code mapping

use repscan_core::error::RepscanError;
use repscan_core::types::RiskLevel;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// The report reached the `--fail-on` threshold.
    #[error("risk level {level} is at or above threshold {threshold}")]
    RiskThreshold {
        level: RiskLevel,
        threshold: RiskLevel,
    },

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped domain error from repscan-core.
    #[error("{0}")]
    Core(#[from] RepscanError),

    /// Scanner construction error.
    #[error("scanner error: {0}")]
    Scanner(String),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                              |
    /// |------|--------------------------------------|
    /// | 0    | Success                              |
    /// | 1    | General / command error              |
    /// | 2    | Configuration error                  |
    /// | 4    | Risk level reached `--fail-on`       |
    /// | 10   | IO error                             |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Core(RepscanError::Config(_)) => 2,
            Self::RiskThreshold { .. } => 4,
            Self::Io(_) | Self::Core(RepscanError::Io(_)) => 10,
            Self::JsonSerialize(_) | Self::Command(_) | Self::Core(_) | Self::Scanner(_) => 1,
        }
    }
}

impl From<repscan_scanner::ReputationScannerError> for CliError {
    fn from(e: repscan_scanner::ReputationScannerError) -> Self {
        match e {
            repscan_scanner::ReputationScannerError::Config { .. } => Self::Config(e.to_string()),
            other => Self::Scanner(other.to_string()),
        }
    }
}
