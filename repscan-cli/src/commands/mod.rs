//! Command handlers -- one module per subcommand

pub mod batch;
pub mod checks;
pub mod config;
pub mod scan;
pub mod version;

use std::path::{Path, PathBuf};

use repscan_core::config::{DEFAULT_CONFIG_PATH, RepscanConfig};
use repscan_core::error::RepscanError;

/// Path the configuration is read from.
pub fn config_source(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load the effective configuration.
///
/// An explicitly requested file must exist; the default `repscan.toml`
/// falls back to built-in defaults when absent.
pub async fn load_config(explicit: Option<&Path>) -> Result<RepscanConfig, RepscanError> {
    match explicit {
        Some(path) => RepscanConfig::load(path).await,
        None => RepscanConfig::load_or_default(DEFAULT_CONFIG_PATH).await,
    }
}
