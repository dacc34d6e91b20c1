//! 권고 문구 생성

use repscan_core::types::CheckResult;

/// 실패 검사가 없을 때의 첫 번째 권고
pub const ALL_CLEAR: &str = "✓ Address passed all automated checks";

/// 실패 검사가 없을 때의 두 번째 권고
pub const MANUAL_REVIEW: &str = "⚠️  Manual review still recommended for high-value transactions";

/// 검사 결과에서 권고 문구를 만듭니다.
///
/// `fail` 검사마다 하나씩 실행 순서대로 생성하며, `warning`은 개별 권고를 만들지 않습니다.
/// 실패가 하나도 없으면 [`ALL_CLEAR`], [`MANUAL_REVIEW`] 두 개를 반환합니다.
pub fn recommendations(checks: &[CheckResult]) -> Vec<String> {
    let failures: Vec<String> = checks
        .iter()
        .filter(|c| c.is_fail())
        .map(|c| format!("⚠️  {}: {}", c.name(), c.details()))
        .collect();

    if failures.is_empty() {
        vec![ALL_CLEAR.to_owned(), MANUAL_REVIEW.to_owned()]
    } else {
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repscan_core::types::CheckStatus;

    fn check(name: &str, status: CheckStatus, score: u8, details: &str) -> CheckResult {
        CheckResult::new(name, status, score, details).unwrap()
    }

    #[test]
    fn single_failure_yields_single_recommendation() {
        let checks = [
            check("Address Format", CheckStatus::Pass, 100, "Valid address format"),
            check("Contract Check", CheckStatus::Pass, 100, "ok"),
            check(
                "Known Patterns",
                CheckStatus::Fail,
                0,
                "Matches known malicious pattern",
            ),
        ];
        let recs = recommendations(&checks);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0], "⚠️  Known Patterns: Matches known malicious pattern");
    }

    #[test]
    fn no_failures_yields_fixed_pair() {
        let checks = [
            check("A", CheckStatus::Pass, 100, "ok"),
            check("B", CheckStatus::Warning, 50, "degraded"),
        ];
        assert_eq!(recommendations(&checks), vec![ALL_CLEAR, MANUAL_REVIEW]);
    }

    #[test]
    fn empty_checks_yield_fixed_pair() {
        assert_eq!(recommendations(&[]), vec![ALL_CLEAR, MANUAL_REVIEW]);
    }

    #[test]
    fn warnings_never_produce_recommendations() {
        let checks = [
            check("A", CheckStatus::Warning, 50, "w1"),
            check("B", CheckStatus::Fail, 0, "f1"),
            check("C", CheckStatus::Warning, 50, "w2"),
        ];
        let recs = recommendations(&checks);
        assert_eq!(recs, vec!["⚠️  B: f1"]);
    }

    #[test]
    fn failure_order_mirrors_check_order() {
        let checks = [
            check("Second", CheckStatus::Fail, 0, "x"),
            check("First", CheckStatus::Fail, 0, "y"),
        ];
        let recs = recommendations(&checks);
        assert!(recs[0].contains("Second"));
        assert!(recs[1].contains("First"));
    }
}
