//! Logging initialization for the repscan CLI.
//!
//! Configures `tracing-subscriber` from the `[general]` section of
//! `RepscanConfig`.
//!
//! Every log line goes to stderr. stdout belongs to the rendered output:
//! the text report, or with `--output json` a single JSON document that
//! callers pipe into `jq` or store as-is. A log line interleaved on stdout
//! would corrupt that document, so this holds for both log formats and for
//! every level, including `debug` and `trace` during a batch run.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use repscan_core::config::GeneralConfig;

/// Log line encoding selected by `general.log_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers.
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl LogFormat {
    /// Parse the configured format name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(anyhow::anyhow!(
                "unknown log format '{}', expected 'json' or 'pretty'",
                other
            )),
        }
    }
}

/// Sink for all log output. Never stdout.
fn log_writer() -> std::io::Stderr {
    std::io::stderr()
}

/// Build the level filter. `RUST_LOG` takes precedence over `log_level`.
fn level_filter(log_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(log_level)
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", log_level, e))
}

/// Initialize the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros are used.
/// The format is checked before the filter so a bad `log_format` is
/// reported even when `RUST_LOG` is set.
pub fn init_tracing(config: &GeneralConfig) -> Result<()> {
    let format = LogFormat::parse(&config.log_format)?;
    let filter = level_filter(&config.log_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(log_writer),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(log_writer),
            )
            .try_init(),
    };

    installed.map_err(|e| {
        anyhow::anyhow!("failed to initialize {:?} tracing subscriber: {}", format, e)
    })
}
