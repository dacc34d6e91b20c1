//! 평판 스캐너 오케스트레이터 -- 검사 실행과 보고서 조립
//!
//! # 내부 아키텍처
//!
//! ```text
//! (address, network) --> CheckRegistry::for_mode(mode)
//!                               |
//!                 +-------------+-------------+
//!                 |   tokio::spawn + timeout (검사마다)
//!                 v
//!         Vec<CheckResult> (등록 순서)
//!                 |
//!   overall_score --> classify_risk --> recommendations
//!                 |
//!         ReputationReport
//! ```
//!
//! 스캔은 실패하지 않습니다. 검사가 타임아웃되거나 패닉하면 해당 검사만
//! `warning/50`으로 기록되고 나머지 검사는 계속 실행됩니다.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::error::Elapsed;
use tracing::{debug, info, warn};

use repscan_core::config::RepscanConfig;
use repscan_core::metrics as m;
use repscan_core::types::{CheckResult, ScanMode};

use crate::check::{Check, PatternDenyList};
use crate::config::ReputationScannerConfig;
use crate::credentials::{ApiKeyChain, ApiKeyProvider, NoApiKeys};
use crate::error::ReputationScannerError;
use crate::registry::CheckRegistry;
use crate::report::ReputationReport;

/// 평판 스캐너 오케스트레이터
///
/// 스캔 사이에 공유하는 가변 상태가 없으며,
/// 한 스캔의 결과가 다른 스캔에 영향을 주지 않습니다.
pub struct ReputationScanner {
    /// 스캐너 설정
    config: ReputationScannerConfig,
    /// 검사 레지스트리
    registry: CheckRegistry,
}

impl ReputationScanner {
    /// 스캐너 설정
    pub fn config(&self) -> &ReputationScannerConfig {
        &self.config
    }

    /// 검사 레지스트리
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// 등록된 모든 검사를 실행합니다.
    pub async fn run_full_scan(&self, address: &str, network: &str) -> ReputationReport {
        self.run_scan(ScanMode::Full, address, network).await
    }

    /// quick 검사(Address Format, Known Patterns)만 실행합니다.
    pub async fn run_quick_scan(&self, address: &str, network: &str) -> ReputationReport {
        self.run_scan(ScanMode::Quick, address, network).await
    }

    /// 지정한 모드로 스캔을 실행하고 보고서를 반환합니다.
    pub async fn run_scan(&self, mode: ScanMode, address: &str, network: &str) -> ReputationReport {
        let started = Instant::now();
        let timestamp = Utc::now();
        let checks = self.registry.for_mode(mode);

        debug!(
            address,
            network,
            mode = %mode,
            checks = checks.len(),
            parallel = self.config.parallel_checks,
            "starting scan"
        );

        let address_arc: Arc<str> = Arc::from(address);
        let network_arc: Arc<str> = Arc::from(network);
        let timeout = self.config.check_timeout();

        let results = if self.config.parallel_checks {
            run_parallel(checks, address_arc, network_arc, timeout).await
        } else {
            let mut results = Vec::with_capacity(checks.len());
            for check in checks {
                results.push(
                    execute_check(check, Arc::clone(&address_arc), Arc::clone(&network_arc), timeout)
                        .await,
                );
            }
            results
        };

        for result in &results {
            debug!(
                check = result.name(),
                status = %result.status(),
                score = result.score(),
                "check completed"
            );
            metrics::counter!(
                m::CHECK_RESULTS_TOTAL,
                m::LABEL_CHECK => result.name().to_owned(),
                m::LABEL_STATUS => result.status().as_str()
            )
            .increment(1);
        }

        let report = ReputationReport::assemble(address, network, timestamp, results);

        let elapsed = started.elapsed();
        metrics::counter!(m::SCANS_COMPLETED_TOTAL, m::LABEL_MODE => mode.as_str()).increment(1);
        metrics::histogram!(m::SCAN_DURATION_SECONDS).record(elapsed.as_secs_f64());

        info!(
            address,
            network,
            mode = %mode,
            score = report.overall_score(),
            risk_level = %report.risk_level(),
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "scan completed"
        );

        report
    }
}

/// 모든 검사를 동시에 시작하고, 등록 순서대로 결과를 모읍니다.
async fn run_parallel(
    checks: Vec<Arc<dyn Check>>,
    address: Arc<str>,
    network: Arc<str>,
    timeout: Duration,
) -> Vec<CheckResult> {
    let tasks: Vec<CheckTask> = checks
        .into_iter()
        .map(|check| spawn_check(check, Arc::clone(&address), Arc::clone(&network), timeout))
        .collect();

    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(task.join(timeout).await);
    }
    results
}

/// 검사 하나를 실행하고 결과를 기다립니다.
async fn execute_check(
    check: Arc<dyn Check>,
    address: Arc<str>,
    network: Arc<str>,
    timeout: Duration,
) -> CheckResult {
    spawn_check(check, address, network, timeout)
        .join(timeout)
        .await
}

/// 실행 중인 검사 태스크
struct CheckTask {
    name: String,
    handle: JoinHandle<Result<CheckResult, Elapsed>>,
}

/// 검사를 별도 태스크로 시작합니다.
///
/// 타임아웃은 태스크 안에서 적용되므로, 시간이 지나면 검사 future가 drop되어
/// 진행 중인 작업도 함께 취소됩니다.
fn spawn_check(
    check: Arc<dyn Check>,
    address: Arc<str>,
    network: Arc<str>,
    timeout: Duration,
) -> CheckTask {
    let name = check.name().to_owned();
    let handle = tokio::spawn(async move {
        tokio::time::timeout(timeout, check.run(&address, &network)).await
    });
    CheckTask { name, handle }
}

impl CheckTask {
    /// 태스크 결과를 기다립니다. 타임아웃과 패닉은 `warning/50` 결과로 변환됩니다.
    async fn join(self, timeout: Duration) -> CheckResult {
        let name = self.name;
        match self.handle.await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                warn!(check = %name, timeout_ms, "check timed out, recording degraded result");
                metrics::counter!(m::CHECK_TIMEOUTS_TOTAL, m::LABEL_CHECK => name.clone())
                    .increment(1);
                CheckResult::degraded(name, format!("Check timed out after {timeout_ms} ms"))
            }
            Err(e) => {
                warn!(check = %name, error = %e, "check panicked, recording degraded result");
                metrics::counter!(m::CHECK_FAILURES_TOTAL, m::LABEL_CHECK => name.clone())
                    .increment(1);
                CheckResult::degraded(name, "Check aborted unexpectedly")
            }
        }
    }
}

/// [`ReputationScanner`] 빌더
///
/// 레지스트리를 지정하지 않으면 설정의 거부 목록과 API 키 제공자로
/// 내장 검사 6개를 등록합니다.
pub struct ReputationScannerBuilder {
    /// 스캐너 설정
    config: ReputationScannerConfig,
    /// 사용자 지정 레지스트리
    registry: Option<CheckRegistry>,
    /// API 키 제공자
    api_keys: Option<Arc<dyn ApiKeyProvider>>,
}

impl ReputationScannerBuilder {
    /// 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self {
            config: ReputationScannerConfig::default(),
            registry: None,
            api_keys: None,
        }
    }

    /// 전체 설정에서 스캐너 설정과 API 키 체인(설정 파일 → 환경변수)을 가져옵니다.
    pub fn from_core(core: &RepscanConfig) -> Self {
        Self::new()
            .config(ReputationScannerConfig::from_core(&core.scanner))
            .api_keys(Arc::new(ApiKeyChain::from_config(core)))
    }

    /// 스캐너 설정을 지정합니다.
    pub fn config(mut self, config: ReputationScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// 내장 검사 대신 사용할 레지스트리를 지정합니다.
    pub fn registry(mut self, registry: CheckRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// API 키 제공자를 지정합니다.
    pub fn api_keys(mut self, provider: Arc<dyn ApiKeyProvider>) -> Self {
        self.api_keys = Some(provider);
        self
    }

    /// 스캐너를 빌드합니다.
    ///
    /// # Errors
    ///
    /// - 설정 검증 실패 시 `ReputationScannerError::Config`
    /// - 레지스트리가 비어 있으면 `ReputationScannerError::EmptyRegistry`
    pub fn build(self) -> Result<ReputationScanner, ReputationScannerError> {
        self.config.validate()?;

        let registry = match self.registry {
            Some(registry) => registry,
            None => {
                let deny_list = PatternDenyList::new(&self.config.malicious_patterns);
                let keys = self
                    .api_keys
                    .unwrap_or_else(|| Arc::new(NoApiKeys) as Arc<dyn ApiKeyProvider>);
                CheckRegistry::builtin(deny_list, keys)
            }
        };

        if registry.is_empty() {
            return Err(ReputationScannerError::EmptyRegistry);
        }

        Ok(ReputationScanner {
            config: self.config,
            registry,
        })
    }
}

impl Default for ReputationScannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckOutcome;
    use repscan_core::pipeline::BoxFuture;
    use repscan_core::types::{CheckStatus, RiskLevel};

    const CLEAN: &str = "0xABCDEF0123456789ABCDEF0123456789ABCDEF01";

    struct Constant(&'static str, u8);

    impl Check for Constant {
        fn name(&self) -> &str {
            self.0
        }

        fn evaluate<'a>(
            &'a self,
            _address: &'a str,
            _network: &'a str,
        ) -> BoxFuture<'a, CheckOutcome> {
            Box::pin(async move { CheckOutcome::new(CheckStatus::Warning, self.1, "constant") })
        }
    }

    #[test]
    fn builder_creates_scanner_with_builtin_checks() {
        let scanner = ReputationScannerBuilder::new().build().unwrap();
        assert_eq!(scanner.registry().len(), 6);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let result = ReputationScannerBuilder::new()
            .config(ReputationScannerConfig {
                check_timeout_ms: 0,
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(ReputationScannerError::Config { .. })));
    }

    #[test]
    fn builder_rejects_empty_registry() {
        let result = ReputationScannerBuilder::new()
            .registry(CheckRegistry::new())
            .build();
        assert!(matches!(result, Err(ReputationScannerError::EmptyRegistry)));
    }

    #[test]
    fn from_core_uses_configured_patterns() {
        let mut core = RepscanConfig::default();
        core.scanner.malicious_patterns = vec!["abcdef01".to_owned()];
        let scanner = ReputationScannerBuilder::from_core(&core).build().unwrap();
        assert_eq!(scanner.config().malicious_patterns, vec!["abcdef01"]);
    }

    #[tokio::test]
    async fn quick_scan_of_clean_address() {
        let scanner = ReputationScannerBuilder::new().build().unwrap();
        let report = scanner.run_quick_scan(CLEAN, "ethereum").await;

        assert_eq!(report.checks().len(), 2);
        assert_eq!(report.overall_score(), 100);
        assert_eq!(report.risk_level(), RiskLevel::Low);
        assert_eq!(report.recommendations().len(), 2);
    }

    #[tokio::test]
    async fn full_scan_of_clean_address_is_high_risk() {
        let scanner = ReputationScannerBuilder::new().build().unwrap();
        let report = scanner.run_full_scan(CLEAN, "ethereum").await;

        // 100 + 50 * 4 + 100 = 400, 400 / 6 = 66
        assert_eq!(report.checks().len(), 6);
        assert_eq!(report.overall_score(), 66);
        assert_eq!(report.risk_level(), RiskLevel::High);
    }

    #[tokio::test]
    async fn custom_registry_is_used_as_is() {
        let mut registry = CheckRegistry::new();
        registry.register(Arc::new(Constant("A", 80))).unwrap();
        registry.register(Arc::new(Constant("B", 61))).unwrap();

        let scanner = ReputationScannerBuilder::new()
            .registry(registry)
            .build()
            .unwrap();
        let report = scanner.run_full_scan("anything", "base").await;
        assert_eq!(report.overall_score(), 70);
        assert_eq!(report.risk_level(), RiskLevel::Medium);
    }

    #[tokio::test]
    async fn quick_scan_with_no_quick_checks_yields_empty_report() {
        let mut registry = CheckRegistry::new();
        registry.register(Arc::new(Constant("Slow", 50))).unwrap();
        let scanner = ReputationScannerBuilder::new()
            .registry(registry)
            .build()
            .unwrap();

        let report = scanner.run_quick_scan(CLEAN, "ethereum").await;
        assert!(report.checks().is_empty());
        assert_eq!(report.overall_score(), 0);
        assert_eq!(report.risk_level(), RiskLevel::Critical);
    }

    #[tokio::test]
    async fn earlier_scans_do_not_affect_later_ones() {
        let scanner = ReputationScannerBuilder::new().build().unwrap();
        let first = scanner.run_quick_scan(CLEAN, "ethereum").await;
        scanner.run_full_scan(CLEAN, "ethereum").await;
        scanner.run_scan(ScanMode::Quick, "bad", "base").await;
        let again = scanner.run_quick_scan(CLEAN, "ethereum").await;
        assert!(first.same_findings(&again));
    }
}
