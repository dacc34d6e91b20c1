//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use repscan_core::types::RiskLevel;

/// repscan -- reputation scanner for agent wallet addresses.
///
/// Use `repscan <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "repscan", version, about, long_about = None)]
pub struct Cli {
    /// Path to the repscan.toml configuration file (default: ./repscan.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a single address.
    Scan(ScanArgs),

    /// Quick-scan every address listed in a file.
    Batch(BatchArgs),

    /// List the registered checks.
    Checks(ChecksArgs),

    /// Manage configuration.
    Config(ConfigArgs),

    /// Print the scanner version.
    Version,
}

// ---- scan ----

/// Scan a single address and render its reputation report.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Address to scan (0x-prefixed, 40 hex characters).
    pub address: String,

    /// Network name (default: scanner.default_network).
    pub network: Option<String>,

    /// Run only the checks that need no external data.
    #[arg(short, long)]
    pub quick: bool,

    /// Exit with code 4 when the risk level is at or above this level.
    #[arg(long)]
    pub fail_on: Option<FailOn>,
}

/// Risk threshold accepted by `--fail-on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    Low,
    Medium,
    High,
    Critical,
}

impl From<FailOn> for RiskLevel {
    fn from(value: FailOn) -> Self {
        match value {
            FailOn::Low => RiskLevel::Low,
            FailOn::Medium => RiskLevel::Medium,
            FailOn::High => RiskLevel::High,
            FailOn::Critical => RiskLevel::Critical,
        }
    }
}

// ---- batch ----

/// Quick-scan a list of addresses, one per line.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one address per line.
    pub file: PathBuf,

    /// Network name (default: batch.network).
    #[arg(short, long)]
    pub network: Option<String>,

    /// Where to write the JSON array of reports (default: batch.output_file).
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Delay between addresses in milliseconds (default: batch.delay_ms).
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

// ---- checks ----

/// List the registered checks in execution order.
#[derive(Args, Debug)]
pub struct ChecksArgs {
    /// Show only the checks used by quick scans.
    #[arg(short, long)]
    pub quick: bool,
}

// ---- config ----

/// Manage repscan configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, scanner, batch, api_keys).
        #[arg(long)]
        section: Option<String>,
    },
}
