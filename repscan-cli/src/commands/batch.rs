//! `repscan batch` command handler

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use repscan_core::config::{MAX_BATCH_DELAY_MS, RepscanConfig};
use repscan_core::types::RiskLevel;
use repscan_scanner::{
    BatchScanner, BatchSummary, FixedDelay, ReputationReport, ReputationScannerBuilder,
    parse_address_list,
};

use crate::cli::BatchArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render, paint_risk, risk_glyph};

/// Number of address characters shown in per-address progress lines.
const ADDRESS_PREVIEW_CHARS: usize = 20;

/// Execute the `batch` command.
pub async fn execute(
    args: BatchArgs,
    config: &RepscanConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let network = args.network.unwrap_or_else(|| config.batch.network.clone());
    let output_file = args
        .output_file
        .unwrap_or_else(|| PathBuf::from(&config.batch.output_file));
    let delay_ms = resolve_delay(args.delay_ms, config)?;

    info!(file = %args.file.display(), "reading address list");
    let text = tokio::fs::read_to_string(&args.file).await?;
    let list = parse_address_list(&text);

    let scanner = ReputationScannerBuilder::from_core(config).build()?;
    let batch = BatchScanner::new(&scanner, Box::new(FixedDelay::from_millis(delay_ms)));

    writer.progress(&format!("🔍 Batch scanning {} addresses...", list.len()))?;

    let mut write_error: Option<std::io::Error> = None;
    let outcome = batch
        .run(&list, &network, |report| {
            if write_error.is_some() {
                return;
            }
            if let Err(e) = writer.progress(&progress_line(report)) {
                write_error = Some(e);
            }
        })
        .await;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    save_reports(&output_file, &outcome.reports).await?;
    info!(path = %output_file.display(), reports = outcome.reports.len(), "batch results saved");

    let result = BatchResult {
        network,
        output_file: output_file.display().to_string(),
        summary: outcome.summary,
    };
    writer.render(&result)
}

/// Pick the inter-address delay, checking a `--delay-ms` override against
/// the same bound the config file is held to.
///
/// # Errors
///
/// Returns `CliError::Config` if the override exceeds `MAX_BATCH_DELAY_MS`.
pub fn resolve_delay(override_ms: Option<u64>, config: &RepscanConfig) -> Result<u64, CliError> {
    match override_ms {
        Some(ms) if ms > MAX_BATCH_DELAY_MS => Err(CliError::Config(format!(
            "invalid value for --delay-ms: {ms} (must be 0-{MAX_BATCH_DELAY_MS})"
        ))),
        Some(ms) => Ok(ms),
        None => Ok(config.batch.delay_ms),
    }
}

/// One progress line per scanned address.
pub fn progress_line(report: &ReputationReport) -> String {
    let level = report.risk_level();
    let preview: String = report.address().chars().take(ADDRESS_PREVIEW_CHARS).collect();
    format!(
        "{}... [{}] Score: {}/100 {}",
        preview,
        paint_risk(level, level.as_str()),
        report.overall_score(),
        risk_glyph(level)
    )
}

/// Write all reports as a pretty-printed JSON array.
pub async fn save_reports(path: &Path, reports: &[ReputationReport]) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(reports)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[derive(Serialize)]
pub struct BatchResult {
    pub network: String,
    pub output_file: String,
    pub summary: BatchSummary,
}

impl Render for BatchResult {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w)?;
        writeln!(
            w,
            "Scanned {} addresses on {} ({} lines skipped)",
            self.summary.scanned, self.network, self.summary.skipped
        )?;
        for level in RiskLevel::ALL {
            let count = self.summary.count(level);
            if count > 0 {
                writeln!(
                    w,
                    "  {} {:<8} {}",
                    risk_glyph(level),
                    paint_risk(level, level.as_str()),
                    count
                )?;
            }
        }
        writeln!(w)?;
        writeln!(w, "✅ Results saved to {}", self.output_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use repscan_core::types::{CheckResult, CheckStatus};

    fn report(address: &str, score: u8) -> ReputationReport {
        let status = if score == 100 {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        };
        let check = CheckResult::new("Known Patterns", status, score, "details")
            .expect("valid result");
        ReputationReport::assemble(address, "ethereum", Utc::now(), vec![check])
    }

    #[test]
    fn test_resolve_delay_accepts_bounds() {
        let config = RepscanConfig::default();
        assert_eq!(resolve_delay(Some(0), &config).expect("0 is valid"), 0);
        assert_eq!(
            resolve_delay(Some(MAX_BATCH_DELAY_MS), &config).expect("upper bound is valid"),
            MAX_BATCH_DELAY_MS
        );
        assert_eq!(
            resolve_delay(None, &config).expect("config value"),
            config.batch.delay_ms
        );
    }

    #[test]
    fn test_resolve_delay_rejects_override_above_limit() {
        let err = resolve_delay(Some(MAX_BATCH_DELAY_MS + 1), &RepscanConfig::default())
            .expect_err("override above the limit should fail");
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("--delay-ms"));
    }

    #[test]
    fn test_progress_line_truncates_address() {
        let line = progress_line(&report("0xABCDEF0123456789ABCDEF0123456789ABCDEF01", 100));
        assert!(line.starts_with("0xABCDEF0123456789AB..."));
        assert!(line.contains("Score: 100/100"));
        assert!(line.contains("low"));
        assert!(line.ends_with("🟢"));
    }

    #[test]
    fn test_progress_line_short_address() {
        let line = progress_line(&report("0x12", 0));
        assert!(line.starts_with("0x12..."));
        assert!(line.contains("critical"));
        assert!(line.ends_with("🔴"));
    }

    #[test]
    fn test_batch_result_text_lists_nonzero_levels() {
        let mut summary = BatchSummary::default();
        summary.record(&report("0xaaa", 100));
        summary.record(&report("0xbbb", 0));
        summary.skipped = 3;
        let result = BatchResult {
            network: "base".to_owned(),
            output_file: "out.json".to_owned(),
            summary,
        };

        let mut buffer = Vec::new();
        result.render_text(&mut buffer).expect("render should succeed");
        let output = String::from_utf8(buffer).expect("valid UTF-8");

        assert!(output.contains("Scanned 2 addresses on base (3 lines skipped)"));
        assert!(output.contains("🟢"));
        assert!(output.contains("🔴"));
        assert!(!output.contains("🟡"));
        assert!(output.contains("✅ Results saved to out.json"));
    }

    #[tokio::test]
    async fn test_save_reports_writes_json_array() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        let path = dir.path().join("results.json");
        let reports = vec![report("0xaaa", 100), report("0xbbb", 0)];

        save_reports(&path, &reports).await.expect("save should succeed");

        let content = std::fs::read_to_string(&path).expect("should read results");
        let value: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
        let array = value.as_array().expect("top level should be an array");
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["address"], "0xaaa");
        assert_eq!(array[1]["risk_level"], "critical");
        assert!(content.contains('\n'), "output should be pretty-printed");
    }
}
