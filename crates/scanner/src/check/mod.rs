//! 주소 검사 -- 주소 형식, 컨트랙트, 활동, 알려진 패턴
//!
//! [`Check`] trait은 모든 검사가 구현해야 하는 인터페이스입니다.
//! 검사는 `(address, network)`만 보고 결과를 내는 순수 함수이며,
//! 다른 검사의 결과에 의존하지 않습니다.
//!
//! # 내장 검사 (선언 순서)
//!
//! 1. Address Format -- [`AddressFormatCheck`] (quick)
//! 2. Contract Check -- [`ContractCheck`]
//! 3. Contract Verification -- [`VerificationCheck`]
//! 4. Account Age -- [`AccountAgeCheck`]
//! 5. Transaction Volume -- [`TransactionVolumeCheck`]
//! 6. Known Patterns -- [`KnownPatternsCheck`] (quick)
//!
//! # 확장
//!
//! 새 검사는 `Check` trait을 구현하고 [`CheckRegistry`](crate::registry::CheckRegistry)에
//! 등록합니다. 외부 데이터가 없어 평가를 끝낼 수 없으면 `fail`이 아니라
//! [`CheckOutcome::warning`]으로 보고해야 합니다.

pub mod activity;
pub mod address_format;
pub mod contract;
pub mod patterns;

pub use activity::{AccountAgeCheck, TransactionVolumeCheck};
pub use address_format::AddressFormatCheck;
pub use contract::{ContractCheck, VerificationCheck};
pub use patterns::{KnownPatternsCheck, PatternDenyList};

use tracing::warn;

use repscan_core::pipeline::BoxFuture;
use repscan_core::types::{CheckResult, CheckStatus, FAIL_SCORE, PASS_SCORE, WARNING_SCORE};

/// 검사 하나의 평가 결과 (이름 제외)
///
/// 이름은 레지스트리에 등록된 검사 이름으로 채워지므로 검사가 직접 지정하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// 상태
    pub status: CheckStatus,
    /// 점수 (0-100이어야 함)
    pub score: u8,
    /// 설명
    pub details: String,
}

impl CheckOutcome {
    /// 임의의 상태/점수로 결과를 만듭니다.
    ///
    /// 범위 검증은 [`Check::run`]에서 `CheckResult`로 변환할 때 수행됩니다.
    pub fn new(status: CheckStatus, score: u8, details: impl Into<String>) -> Self {
        Self {
            status,
            score,
            details: details.into(),
        }
    }

    /// `pass/100`
    pub fn pass(details: impl Into<String>) -> Self {
        Self::new(CheckStatus::Pass, PASS_SCORE, details)
    }

    /// `warning/50` -- 외부 데이터 부족 등 평가 저하
    pub fn warning(details: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warning, WARNING_SCORE, details)
    }

    /// `fail/0`
    pub fn fail(details: impl Into<String>) -> Self {
        Self::new(CheckStatus::Fail, FAIL_SCORE, details)
    }
}

/// 주소 평판 검사 trait
///
/// 구현체는 `Send + Sync`여야 하며 비동기 태스크에서 실행됩니다.
/// 오케스트레이터는 타임아웃이 지나면 `evaluate`가 반환한 future를 drop하므로,
/// 외부 조회는 블로킹 호출 대신 `.await` 지점을 가진 비동기 I/O로 구현해야 합니다.
pub trait Check: Send + Sync {
    /// 검사 이름 (보고서 안에서 유일)
    fn name(&self) -> &str;

    /// quick 스캔에 포함되는지 여부
    fn quick(&self) -> bool {
        false
    }

    /// 주소를 평가합니다.
    fn evaluate<'a>(&'a self, address: &'a str, network: &'a str) -> BoxFuture<'a, CheckOutcome>;

    /// 평가 결과를 검증된 [`CheckResult`]로 변환합니다.
    ///
    /// 계약을 위반한 결과(점수 범위 초과, 빈 설명)는 `warning/50`으로 대체됩니다.
    fn run<'a>(&'a self, address: &'a str, network: &'a str) -> BoxFuture<'a, CheckResult> {
        Box::pin(async move {
            let outcome = self.evaluate(address, network).await;
            match CheckResult::new(self.name(), outcome.status, outcome.score, outcome.details) {
                Ok(result) => result,
                Err(e) => {
                    warn!(check = self.name(), error = %e, "check returned an invalid result");
                    metrics::counter!(
                        repscan_core::metrics::CHECK_FAILURES_TOTAL,
                        repscan_core::metrics::LABEL_CHECK => self.name().to_owned()
                    )
                    .increment(1);
                    CheckResult::degraded(
                        self.name(),
                        format!("Check returned an invalid result: {e}"),
                    )
                }
            }
        })
    }
}
