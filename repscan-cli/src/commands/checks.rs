//! `repscan checks` command handler

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use repscan_core::config::RepscanConfig;
use repscan_core::types::ScanMode;
use repscan_scanner::{CheckRegistry, ReputationScannerBuilder};

use crate::cli::ChecksArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `checks` command.
pub async fn execute(
    args: ChecksArgs,
    config: &RepscanConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let scanner = ReputationScannerBuilder::from_core(config).build()?;
    let mode = if args.quick {
        ScanMode::Quick
    } else {
        ScanMode::Full
    };
    writer.render(&build_checks_list(scanner.registry(), mode))
}

fn build_checks_list(registry: &CheckRegistry, mode: ScanMode) -> ChecksList {
    let checks = registry
        .for_mode(mode)
        .iter()
        .map(|check| CheckEntry {
            name: check.name().to_owned(),
            quick: check.quick(),
        })
        .collect();
    ChecksList { mode, checks }
}

#[derive(Serialize)]
pub struct ChecksList {
    pub mode: ScanMode,
    pub checks: Vec<CheckEntry>,
}

#[derive(Serialize)]
pub struct CheckEntry {
    pub name: String,
    pub quick: bool,
}

impl Render for ChecksList {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{} ({} scan)", "Checks".bold(), self.mode)?;
        for (index, check) in self.checks.iter().enumerate() {
            let marker = if check.quick { " [quick]" } else { "" };
            writeln!(w, "  {}. {}{}", index + 1, check.name, marker.dimmed())?;
        }
        Ok(())
    }
}
