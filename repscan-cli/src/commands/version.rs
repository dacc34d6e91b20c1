//! `repscan version` command handler

use std::io::Write;

use serde::Serialize;

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Product name shown by `repscan version`.
pub const PRODUCT_NAME: &str = "agent-reputation-scanner";

/// Execute the `version` command.
pub fn execute(writer: &OutputWriter) -> Result<(), CliError> {
    writer.render(&VersionInfo::current())
}

#[derive(Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            name: PRODUCT_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Render for VersionInfo {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{} v{}", self.name, self.version)
    }
}
