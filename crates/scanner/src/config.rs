//! 평판 스캐너 설정
//!
//! [`ReputationScannerConfig`]는 core의 [`ScannerConfig`](repscan_core::config::ScannerConfig)에서
//! 파생되며 오케스트레이터가 사용하는 값만 담습니다.
//!
//! # 사용 예시
//!
//! ```
//! use repscan_scanner::{ReputationScannerConfig, ReputationScannerConfigBuilder};
//!
//! // 기본값으로 생성
//! let config = ReputationScannerConfig::default();
//! config.validate().unwrap();
//!
//! // 빌더로 생성
//! let config = ReputationScannerConfigBuilder::new()
//!     .check_timeout_ms(2_000)
//!     .parallel_checks(true)
//!     .build()
//!     .unwrap();
//! assert!(config.parallel_checks);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use repscan_core::config::ZERO_ADDRESS;

use crate::error::ReputationScannerError;

/// 검사 타임아웃 상한 (ms)
const MAX_CHECK_TIMEOUT_MS: u64 = 60_000;

/// 평판 스캐너 설정
///
/// - **check_timeout_ms**: 검사 하나당 허용 시간. 초과 시 `warning/50`으로 기록
/// - **parallel_checks**: 검사 동시 실행 여부. 결과 순서는 항상 등록 순서
/// - **malicious_patterns**: Known Patterns 검사의 거부 목록
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationScannerConfig {
    /// 검사 하나당 타임아웃 (ms)
    pub check_timeout_ms: u64,
    /// 검사 병렬 실행 여부
    pub parallel_checks: bool,
    /// 알려진 악성 주소 패턴
    pub malicious_patterns: Vec<String>,
}

impl Default for ReputationScannerConfig {
    fn default() -> Self {
        Self {
            check_timeout_ms: 5_000,
            parallel_checks: false,
            malicious_patterns: vec![ZERO_ADDRESS.to_owned()],
        }
    }
}

impl ReputationScannerConfig {
    /// core의 `ScannerConfig`에서 스캐너 설정을 생성합니다.
    pub fn from_core(core: &repscan_core::config::ScannerConfig) -> Self {
        Self {
            check_timeout_ms: core.check_timeout_ms,
            parallel_checks: core.parallel_checks,
            malicious_patterns: core.malicious_patterns.clone(),
        }
    }

    /// 검사 타임아웃을 `Duration`으로 반환합니다.
    pub fn check_timeout(&self) -> Duration {
        Duration::from_millis(self.check_timeout_ms)
    }

    /// 설정 값의 유효성을 검증합니다.
    ///
    /// # 검증 규칙
    ///
    /// - `check_timeout_ms`: 1-60000
    /// - `malicious_patterns`: 빈 문자열 불가 (모든 주소에 매칭됨)
    pub fn validate(&self) -> Result<(), ReputationScannerError> {
        if self.check_timeout_ms == 0 || self.check_timeout_ms > MAX_CHECK_TIMEOUT_MS {
            return Err(ReputationScannerError::Config {
                field: "check_timeout_ms".to_owned(),
                reason: format!("must be 1-{MAX_CHECK_TIMEOUT_MS}"),
            });
        }

        if self.malicious_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(ReputationScannerError::Config {
                field: "malicious_patterns".to_owned(),
                reason: "patterns must not be empty strings".to_owned(),
            });
        }

        Ok(())
    }
}

/// [`ReputationScannerConfig`] 빌더
///
/// 빌드 시 유효성 검증을 수행합니다.
#[derive(Default)]
pub struct ReputationScannerConfigBuilder {
    config: ReputationScannerConfig,
}

impl ReputationScannerConfigBuilder {
    /// 기본값을 가진 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 검사 타임아웃(ms)을 설정합니다.
    pub fn check_timeout_ms(mut self, ms: u64) -> Self {
        self.config.check_timeout_ms = ms;
        self
    }

    /// 검사 병렬 실행 여부를 설정합니다.
    pub fn parallel_checks(mut self, parallel: bool) -> Self {
        self.config.parallel_checks = parallel;
        self
    }

    /// 악성 패턴 목록을 설정합니다.
    pub fn malicious_patterns(mut self, patterns: Vec<String>) -> Self {
        self.config.malicious_patterns = patterns;
        self
    }

    /// 설정을 검증하고 빌드합니다.
    ///
    /// # Errors
    ///
    /// 유효성 검증 실패 시 `ReputationScannerError::Config` 반환
    pub fn build(self) -> Result<ReputationScannerConfig, ReputationScannerError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
