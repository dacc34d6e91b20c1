//! `repscan config` command handler

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use repscan_core::config::RepscanConfig;
use repscan_core::error::RepscanError;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Replacement shown for configured API keys.
const REDACTED: &str = "***";

/// Execute the `config` command.
///
/// `loaded` is the result of loading `source`; it is reported rather than
/// propagated so `config validate` can describe the failure.
pub async fn execute(
    args: ConfigArgs,
    source: &Path,
    loaded: Result<RepscanConfig, RepscanError>,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    match args.action {
        ConfigAction::Validate => execute_validate(source, loaded, writer),
        ConfigAction::Show { section } => execute_show(source, loaded?, section, writer),
    }
}

/// Report whether the configuration loaded and validated.
///
/// # Errors
///
/// Returns `CliError::Config` if validation failed (parse errors, invalid values, missing file).
fn execute_validate(
    source: &Path,
    loaded: Result<RepscanConfig, RepscanError>,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    info!(path = %source.display(), "validating configuration");

    let report = match loaded {
        Ok(_) => ConfigValidationReport {
            source: source.display().to_string(),
            valid: true,
            errors: Vec::new(),
        },
        Err(e) => ConfigValidationReport {
            source: source.display().to_string(),
            valid: false,
            errors: vec![e.to_string()],
        },
    };

    writer.render(&report)?;

    if !report.valid {
        return Err(CliError::Config("configuration is invalid".to_owned()));
    }

    Ok(())
}

/// Print the effective configuration (file + env overrides + defaults).
///
/// API key values are replaced by `***`.
fn execute_show(
    source: &Path,
    mut config: RepscanConfig,
    section: Option<String>,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    redact_api_keys(&mut config);

    let config_toml = match section.as_deref() {
        None => to_toml(&config),
        Some("general") => to_toml(&config.general),
        Some("scanner") => to_toml(&config.scanner),
        Some("batch") => to_toml(&config.batch),
        Some("api_keys") => to_toml(&config.api_keys),
        Some(other) => {
            return Err(CliError::Command(format!(
                "unknown section: {} (expected: general, scanner, batch, api_keys)",
                other
            )));
        }
    };

    let report = ConfigReport {
        source: source.display().to_string(),
        section,
        config_toml,
    };
    writer.render(&report)
}

/// Replace every non-empty API key with a placeholder.
fn redact_api_keys(config: &mut RepscanConfig) {
    for key in config.api_keys.values_mut() {
        if !key.trim().is_empty() {
            *key = REDACTED.to_owned();
        }
    }
}

fn to_toml<T: Serialize + ?Sized>(value: &T) -> String {
    toml::to_string_pretty(value).unwrap_or_else(|e| format!("(serialization error: {})", e))
}

#[derive(Serialize)]
pub struct ConfigValidationReport {
    pub source: String,
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Render for ConfigValidationReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        if self.valid {
            writeln!(w, "{} {} is valid", "✓".green(), self.source)?;
        } else {
            writeln!(w, "{} {} is invalid", "✗".red(), self.source)?;
            for error in &self.errors {
                writeln!(w, "  - {}", error)?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct ConfigReport {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub config_toml: String,
}

impl Render for ConfigReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        match &self.section {
            Some(section) => writeln!(w, "# {} [{}]", self.source, section)?,
            None => writeln!(w, "# {}", self.source)?,
        }
        write!(w, "{}", self.config_toml)?;
        Ok(())
    }
}
