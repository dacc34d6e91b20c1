//! `repscan scan` command handler

use std::io::Write;

use colored::Colorize;
use tracing::info;

use repscan_core::config::RepscanConfig;
use repscan_core::types::{RiskLevel, ScanMode};
use repscan_scanner::{ReputationReport, ReputationScannerBuilder};

use crate::cli::ScanArgs;
use crate::error::CliError;
use crate::output::{
    OutputWriter, Render, heavy_rule, light_rule, paint_risk, paint_status, risk_glyph,
    status_icon,
};

/// Timestamp format used in text reports.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Execute the `scan` command.
pub async fn execute(
    args: ScanArgs,
    config: &RepscanConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let network = args
        .network
        .unwrap_or_else(|| config.scanner.default_network.clone());
    let mode = if args.quick {
        ScanMode::Quick
    } else {
        ScanMode::Full
    };

    let scanner = ReputationScannerBuilder::from_core(config).build()?;

    info!(address = %args.address, network = %network, mode = %mode, "starting scan");
    writer.progress(&format!("🔍 Scanning {} on {}...", args.address, network))?;

    let report = scanner.run_scan(mode, &args.address, &network).await;

    writer.render(&report)?;

    check_threshold(report.risk_level(), args.fail_on.map(RiskLevel::from))
}

/// Return `CliError::RiskThreshold` when `level` is at or above `threshold`.
pub fn check_threshold(level: RiskLevel, threshold: Option<RiskLevel>) -> Result<(), CliError> {
    match threshold {
        Some(threshold) if level >= threshold => {
            Err(CliError::RiskThreshold { level, threshold })
        }
        _ => Ok(()),
    }
}

impl Render for ReputationReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        let heavy = heavy_rule();
        let light = light_rule();
        let level = self.risk_level();

        writeln!(w, "{heavy}")?;
        writeln!(w, "  {}", "REPUTATION REPORT".bold())?;
        writeln!(w, "{heavy}")?;
        writeln!(w, "Address: {}", self.address())?;
        writeln!(w, "Network: {}", self.network())?;
        writeln!(w, "Time:    {}", self.timestamp().format(TIME_FORMAT))?;
        writeln!(w)?;

        writeln!(
            w,
            "Overall Score: {}",
            paint_risk(level, &format!("{}/100", self.overall_score()))
        )?;
        writeln!(
            w,
            "Risk Level:    {} {}",
            risk_glyph(level),
            paint_risk(level, &level.as_str().to_uppercase())
        )?;
        writeln!(w)?;

        writeln!(w, "{}", "CHECKS:".bold())?;
        writeln!(w, "{light}")?;
        for check in self.checks() {
            let status = check.status();
            writeln!(
                w,
                "  {} {:<25} [{}%] {}",
                paint_status(status, status_icon(status)),
                check.name(),
                check.score(),
                paint_status(status, status.as_str())
            )?;
            writeln!(w, "     └─ {}", check.details())?;
        }
        writeln!(w)?;

        writeln!(w, "{}", "RECOMMENDATIONS:".bold())?;
        writeln!(w, "{light}")?;
        for rec in self.recommendations() {
            writeln!(w, "  {rec}")?;
        }
        writeln!(w)?;

        writeln!(w, "{heavy}")?;
        writeln!(w, "⚠️  This is an automated assessment. Always conduct")?;
        writeln!(w, "   additional due diligence for high-value transactions.")?;
        writeln!(w, "{heavy}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use repscan_core::types::{CheckResult, CheckStatus};

    fn render(report: &ReputationReport) -> String {
        let mut buffer = Vec::new();
        report
            .render_text(&mut buffer)
            .expect("text rendering should succeed");
        String::from_utf8(buffer).expect("valid UTF-8")
    }

    fn zero_address_report() -> ReputationReport {
        let checks = vec![
            CheckResult::new("Address Format", CheckStatus::Pass, 100, "Valid address format")
                .expect("valid result"),
            CheckResult::new(
                "Known Patterns",
                CheckStatus::Fail,
                0,
                "Matches known malicious pattern",
            )
            .expect("valid result"),
        ];
        let timestamp = Utc
            .with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
            .single()
            .expect("valid timestamp");
        ReputationReport::assemble(
            "0x0000000000000000000000000000000000000000",
            "ethereum",
            timestamp,
            checks,
        )
    }

    #[test]
    fn test_render_header_fields() {
        let output = render(&zero_address_report());
        assert!(output.contains("REPUTATION REPORT"));
        assert!(output.contains("Address: 0x0000000000000000000000000000000000000000"));
        assert!(output.contains("Network: ethereum"));
        assert!(output.contains("Time:    2026-03-14 09:26:53"));
    }

    #[test]
    fn test_render_score_and_level() {
        let output = render(&zero_address_report());
        assert!(output.contains("50/100"));
        assert!(output.contains("🟠"));
        assert!(output.contains("HIGH"));
    }

    #[test]
    fn test_render_check_lines() {
        let output = render(&zero_address_report());
        assert!(output.contains(&format!("{:<25} [100%]", "Address Format")));
        assert!(output.contains(&format!("{:<25} [0%]", "Known Patterns")));
        assert!(output.contains("     └─ Matches known malicious pattern"));
    }

    #[test]
    fn test_render_recommendations_and_disclaimer() {
        let output = render(&zero_address_report());
        assert!(output.contains("RECOMMENDATIONS:"));
        assert!(output.contains("  ⚠️  Known Patterns: Matches known malicious pattern"));
        assert!(output.contains("This is an automated assessment"));
        assert!(output.trim_end().ends_with(&heavy_rule()));
    }

    #[test]
    fn test_threshold_not_set_always_passes() {
        assert!(check_threshold(RiskLevel::Critical, None).is_ok());
    }

    #[test]
    fn test_threshold_below_passes() {
        assert!(check_threshold(RiskLevel::Medium, Some(RiskLevel::High)).is_ok());
    }

    #[test]
    fn test_threshold_at_or_above_fails() {
        let at = check_threshold(RiskLevel::High, Some(RiskLevel::High));
        assert!(matches!(at, Err(CliError::RiskThreshold { .. })));

        let above = check_threshold(RiskLevel::Critical, Some(RiskLevel::Medium))
            .expect_err("critical should breach medium");
        assert_eq!(above.exit_code(), 4);
    }
}
