//! 점수 집계와 위험 등급 분류
//!
//! 두 함수 모두 입력만으로 결정되는 순수 함수입니다.

use repscan_core::types::{CheckResult, RiskLevel};

/// `low` 하한
pub const LOW_RISK_MIN: u8 = 90;
/// `medium` 하한
pub const MEDIUM_RISK_MIN: u8 = 70;
/// `high` 하한
pub const HIGH_RISK_MIN: u8 = 40;

/// 검사 점수의 가중치 없는 평균 (정수 나눗셈, 내림)
///
/// 검사가 없으면 0을 반환합니다.
pub fn overall_score(checks: &[CheckResult]) -> u8 {
    if checks.is_empty() {
        return 0;
    }
    let total: u64 = checks.iter().map(|c| u64::from(c.score())).sum();
    let count = u64::try_from(checks.len()).unwrap_or(u64::MAX);
    // 각 점수가 100 이하이므로 평균도 100 이하
    u8::try_from(total / count).unwrap_or(repscan_core::types::MAX_SCORE)
}

/// 전체 점수를 위험 등급으로 분류합니다.
///
/// - 90 이상: `low`
/// - 70-89: `medium`
/// - 40-69: `high`
/// - 40 미만: `critical`
pub fn classify_risk(score: u8) -> RiskLevel {
    match score {
        s if s >= LOW_RISK_MIN => RiskLevel::Low,
        s if s >= MEDIUM_RISK_MIN => RiskLevel::Medium,
        s if s >= HIGH_RISK_MIN => RiskLevel::High,
        _ => RiskLevel::Critical,
    }
}
