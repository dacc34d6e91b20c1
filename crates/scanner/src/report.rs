//! 평판 보고서
//!
//! [`ReputationReport`]는 한 번의 스캔 결과입니다. `overall_score`, `risk_level`,
//! `recommendations`는 `checks`에서만 파생되며 직접 설정할 수 없습니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

use repscan_core::types::{CheckResult, RiskLevel};

use crate::recommend::recommendations;
use crate::scoring::{classify_risk, overall_score};

/// 스캔 한 번의 결과 보고서
///
/// JSON 직렬화 필드 순서: `address`, `network`, `timestamp`, `overall_score`,
/// `risk_level`, `checks`, `recommendations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReputationReport {
    address: String,
    network: String,
    timestamp: DateTime<Utc>,
    overall_score: u8,
    risk_level: RiskLevel,
    checks: Vec<CheckResult>,
    recommendations: Vec<String>,
}

impl ReputationReport {
    /// 검사 결과로 보고서를 조립하고 파생 필드를 계산합니다.
    ///
    /// 주소와 네트워크는 입력 그대로 보관합니다 (정규화하지 않음).
    pub fn assemble(
        address: impl Into<String>,
        network: impl Into<String>,
        timestamp: DateTime<Utc>,
        checks: Vec<CheckResult>,
    ) -> Self {
        let overall_score = overall_score(&checks);
        let risk_level = classify_risk(overall_score);
        let recommendations = recommendations(&checks);
        Self {
            address: address.into(),
            network: network.into(),
            timestamp,
            overall_score,
            risk_level,
            checks,
            recommendations,
        }
    }

    /// 입력 주소
    pub fn address(&self) -> &str {
        &self.address
    }

    /// 네트워크 이름
    pub fn network(&self) -> &str {
        &self.network
    }

    /// 스캔 시각
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// 전체 점수 (0-100)
    pub fn overall_score(&self) -> u8 {
        self.overall_score
    }

    /// 위험 등급
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// 실행 순서대로의 검사 결과
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    /// 권고 문구
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// 타임스탬프를 제외한 내용이 같은지 비교합니다.
    pub fn same_findings(&self, other: &Self) -> bool {
        self.address == other.address
            && self.network == other.network
            && self.checks == other.checks
            && self.overall_score == other.overall_score
            && self.risk_level == other.risk_level
            && self.recommendations == other.recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repscan_core::types::CheckStatus;

    use crate::recommend::{ALL_CLEAR, MANUAL_REVIEW};

    fn sample_checks() -> Vec<CheckResult> {
        vec![
            CheckResult::new("Address Format", CheckStatus::Pass, 100, "Valid address format")
                .unwrap(),
            CheckResult::new(
                "Known Patterns",
                CheckStatus::Pass,
                100,
                "No known malicious patterns detected",
            )
            .unwrap(),
        ]
    }

    #[test]
    fn assemble_derives_fields() {
        let report = ReputationReport::assemble("0xabc", "ethereum", Utc::now(), sample_checks());
        assert_eq!(report.overall_score(), 100);
        assert_eq!(report.risk_level(), RiskLevel::Low);
        assert_eq!(report.recommendations(), &[ALL_CLEAR, MANUAL_REVIEW]);
        assert!(report.checks().iter().all(|c| !c.is_fail()));
    }

    #[test]
    fn address_is_not_normalized() {
        let report = ReputationReport::assemble(" 0xABC ", "Base", Utc::now(), Vec::new());
        assert_eq!(report.address(), " 0xABC ");
        assert_eq!(report.network(), "Base");
    }

    #[test]
    fn empty_checks_are_critical() {
        let report = ReputationReport::assemble("0xabc", "ethereum", Utc::now(), Vec::new());
        assert_eq!(report.overall_score(), 0);
        assert_eq!(report.risk_level(), RiskLevel::Critical);
    }

    #[test]
    fn json_field_names_and_order() {
        let report = ReputationReport::assemble("0xabc", "ethereum", Utc::now(), sample_checks());
        let json = serde_json::to_string(&report).unwrap();

        let keys = [
            "\"address\"",
            "\"network\"",
            "\"timestamp\"",
            "\"overall_score\"",
            "\"risk_level\"",
            "\"checks\"",
            "\"recommendations\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(k).unwrap_or_else(|| panic!("missing {k}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["risk_level"], "low");
        assert_eq!(value["overall_score"], 100);
        assert_eq!(value["checks"][0]["name"], "Address Format");
        assert_eq!(value["checks"][0]["status"], "pass");
        assert_eq!(value["checks"][0]["score"], 100);
        assert_eq!(value["checks"][1]["details"], "No known malicious patterns detected");
    }

    #[test]
    fn same_findings_ignores_timestamp() {
        let earlier = ReputationReport::assemble(
            "0xabc",
            "ethereum",
            DateTime::<Utc>::UNIX_EPOCH,
            sample_checks(),
        );
        let later = ReputationReport::assemble("0xabc", "ethereum", Utc::now(), sample_checks());
        assert!(earlier.same_findings(&later));
        assert_ne!(earlier, later);
    }
}
