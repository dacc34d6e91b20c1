//! Integration tests for the reputation scan pipeline
//!
//! Covers the externally observable properties: score aggregation, risk
//! boundaries, built-in check contracts, recommendations, idempotence and the
//! quick-scan end-to-end scenario.

use std::sync::Arc;

use repscan_core::types::{CheckResult, CheckStatus, RiskLevel};
use repscan_scanner::recommend::{ALL_CLEAR, MANUAL_REVIEW};
use repscan_scanner::{
    AddressFormatCheck, Check, KnownPatternsCheck, PatternDenyList, ReputationScannerBuilder,
    ReputationScannerConfigBuilder, StaticApiKeys, classify_risk, overall_score, recommendations,
};

const CLEAN: &str = "0xABCDEF0123456789ABCDEF0123456789ABCDEF01";
const ZERO: &str = "0x0000000000000000000000000000000000000000";

fn result(name: &str, status: CheckStatus, score: u8) -> CheckResult {
    CheckResult::new(name, status, score, "details").unwrap()
}

fn status_counts(report: &repscan_scanner::ReputationReport, status: CheckStatus) -> usize {
    report.checks().iter().filter(|c| c.status() == status).count()
}

#[test]
fn overall_score_is_floor_of_mean() {
    let scores: [u8; 5] = [100, 0, 50, 33, 99];
    let checks: Vec<CheckResult> = scores
        .iter()
        .enumerate()
        .map(|(i, s)| result(&format!("c{i}"), CheckStatus::Warning, *s))
        .collect();
    let expected = scores.iter().map(|s| u32::from(*s)).sum::<u32>() / 5;
    assert_eq!(u32::from(overall_score(&checks)), expected);
    assert_eq!(overall_score(&[]), 0);
}

#[test]
fn risk_boundary_values() {
    assert_eq!(classify_risk(39), RiskLevel::Critical);
    assert_eq!(classify_risk(40), RiskLevel::High);
    assert_eq!(classify_risk(69), RiskLevel::High);
    assert_eq!(classify_risk(70), RiskLevel::Medium);
    assert_eq!(classify_risk(89), RiskLevel::Medium);
    assert_eq!(classify_risk(90), RiskLevel::Low);
}

#[tokio::test]
async fn address_format_contract() {
    let pass = AddressFormatCheck
        .run("0x120e011fB8a12bfcB61e5c1d751C26A5D33Aae91", "ethereum")
        .await;
    assert_eq!((pass.status(), pass.score()), (CheckStatus::Pass, 100));

    for bad in ["0x120e011f", "120e011fB8a12bfcB61e5c1d751C26A5D33Aae9100", ""] {
        let fail = AddressFormatCheck.run(bad, "ethereum").await;
        assert_eq!((fail.status(), fail.score()), (CheckStatus::Fail, 0), "{bad}");
    }
}

#[tokio::test]
async fn known_patterns_contract() {
    let check = KnownPatternsCheck::new(PatternDenyList::default());

    let hit = check.run(ZERO, "ethereum").await;
    assert_eq!((hit.status(), hit.score()), (CheckStatus::Fail, 0));
    assert!(hit.details().contains("malicious pattern"));

    let miss = check.run(CLEAN, "ethereum").await;
    assert_eq!((miss.status(), miss.score()), (CheckStatus::Pass, 100));
}

#[test]
fn recommendation_derivation() {
    let checks = [
        result("Address Format", CheckStatus::Pass, 100),
        result("Contract Check", CheckStatus::Pass, 100),
        CheckResult::new(
            "Known Patterns",
            CheckStatus::Fail,
            0,
            "Matches known malicious pattern",
        )
        .unwrap(),
    ];
    let recs = recommendations(&checks);
    assert_eq!(recs.len(), 1);
    assert!(recs[0].contains("Known Patterns"));

    let clean = [result("A", CheckStatus::Pass, 100), result("B", CheckStatus::Warning, 50)];
    assert_eq!(recommendations(&clean), vec![ALL_CLEAR, MANUAL_REVIEW]);
}

#[tokio::test]
async fn full_scan_is_idempotent() {
    let scanner = ReputationScannerBuilder::new()
        .api_keys(Arc::new(StaticApiKeys::from_pairs([("ethereum", "key")])))
        .build()
        .unwrap();

    let first = scanner.run_full_scan(CLEAN, "ethereum").await;
    let second = scanner.run_full_scan(CLEAN, "ethereum").await;

    assert_eq!(first.checks(), second.checks());
    assert_eq!(first.overall_score(), second.overall_score());
    assert_eq!(first.risk_level(), second.risk_level());
    assert_eq!(first.recommendations(), second.recommendations());
    assert!(first.same_findings(&second));
}

#[tokio::test]
async fn quick_scan_end_to_end() {
    let scanner = ReputationScannerBuilder::new().build().unwrap();
    let report = scanner.run_quick_scan(CLEAN, "ethereum").await;

    assert_eq!(report.address(), CLEAN);
    assert_eq!(report.network(), "ethereum");
    let checks: Vec<(&str, CheckStatus, u8)> = report
        .checks()
        .iter()
        .map(|c| (c.name(), c.status(), c.score()))
        .collect();
    assert_eq!(
        checks,
        vec![
            ("Address Format", CheckStatus::Pass, 100),
            ("Known Patterns", CheckStatus::Pass, 100),
        ]
    );
    assert_eq!(report.overall_score(), 100);
    assert_eq!(report.risk_level(), RiskLevel::Low);
    assert_eq!(report.recommendations(), &[ALL_CLEAR, MANUAL_REVIEW]);
}

#[tokio::test]
async fn full_scan_runs_checks_in_declared_order() {
    let scanner = ReputationScannerBuilder::new().build().unwrap();
    let report = scanner.run_full_scan(ZERO, "base").await;

    let names: Vec<&str> = report.checks().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec![
            "Address Format",
            "Contract Check",
            "Contract Verification",
            "Account Age",
            "Transaction Volume",
            "Known Patterns",
        ]
    );
    // 100 + 50 * 4 + 0 = 300, 300 / 6 = 50
    assert_eq!(report.overall_score(), 50);
    assert_eq!(report.risk_level(), RiskLevel::High);
    assert_eq!(
        report.recommendations(),
        &["⚠️  Known Patterns: Matches known malicious pattern"]
    );
}

#[tokio::test]
async fn verification_text_depends_on_credential_only() {
    let without = ReputationScannerBuilder::new().build().unwrap();
    let with = ReputationScannerBuilder::new()
        .api_keys(Arc::new(StaticApiKeys::from_pairs([("base", "k")])))
        .build()
        .unwrap();

    let a = without.run_full_scan(CLEAN, "base").await;
    let b = with.run_full_scan(CLEAN, "base").await;

    assert_eq!(a.overall_score(), b.overall_score());
    let details = |r: &repscan_scanner::ReputationReport| {
        r.checks()
            .iter()
            .find(|c| c.name() == "Contract Verification")
            .map(|c| c.details().to_owned())
    };
    assert_ne!(details(&a), details(&b));
}

#[tokio::test]
async fn configured_deny_list_replaces_default() {
    let config = ReputationScannerConfigBuilder::new()
        .malicious_patterns(vec!["abcdef0123".to_owned()])
        .build()
        .unwrap();
    let scanner = ReputationScannerBuilder::new().config(config).build().unwrap();

    let flagged = scanner.run_quick_scan(CLEAN, "ethereum").await;
    assert_eq!(status_counts(&flagged, CheckStatus::Fail), 1);

    // 기본 목록(zero 주소)은 더 이상 적용되지 않음
    let zero = scanner.run_quick_scan(ZERO, "ethereum").await;
    assert_eq!(status_counts(&zero, CheckStatus::Fail), 0);
}

#[tokio::test]
async fn report_json_uses_documented_field_names() {
    let scanner = ReputationScannerBuilder::new().build().unwrap();
    let report = scanner.run_quick_scan(CLEAN, "ethereum").await;
    let value = serde_json::to_value(&report).unwrap();

    let object = value.as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    for key in [
        "address",
        "network",
        "timestamp",
        "overall_score",
        "risk_level",
        "checks",
        "recommendations",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(keys.len(), 7);

    let check = value["checks"][0].as_object().unwrap();
    let mut check_keys: Vec<&str> = check.keys().map(String::as_str).collect();
    check_keys.sort_unstable();
    assert_eq!(check_keys, vec!["details", "name", "score", "status"]);
}
