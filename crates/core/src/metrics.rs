//! 메트릭 상수 및 설명 등록
//!
//! 모든 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 스캐너는 이 상수를 사용하여 `metrics::counter!()`, `metrics::histogram!()`
//! 매크로를 호출합니다. 레코더가 설치되지 않으면 기록은 무시됩니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `repscan_`
//! - 접미어: `_total` (counter), `_seconds` (histogram/latency)
//!
//! # 사용 예시
//!
//! ```ignore
//! use metrics::counter;
//!
//! counter!(repscan_core::metrics::CHECK_TIMEOUTS_TOTAL).increment(1);
//! ```

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 스캔 모드 레이블 키 (full, quick)
pub const LABEL_MODE: &str = "mode";

/// 검사 이름 레이블 키
pub const LABEL_CHECK: &str = "check";

/// 검사 상태 레이블 키 (pass, warning, fail)
pub const LABEL_STATUS: &str = "status";

/// 위험 등급 레이블 키 (low, medium, high, critical)
pub const LABEL_RISK_LEVEL: &str = "risk_level";

// ─── 스캐너 메트릭 ──────────────────────────────────────────────────

/// 완료된 스캔 수 (counter, label: mode)
pub const SCANS_COMPLETED_TOTAL: &str = "repscan_scans_completed_total";

/// 검사 결과 수 (counter, labels: check, status)
pub const CHECK_RESULTS_TOTAL: &str = "repscan_check_results_total";

/// 타임아웃된 검사 수 (counter, label: check)
pub const CHECK_TIMEOUTS_TOTAL: &str = "repscan_check_timeouts_total";

/// 패닉 등으로 실패한 검사 수 (counter, label: check)
pub const CHECK_FAILURES_TOTAL: &str = "repscan_check_failures_total";

/// 스캔 하나의 소요 시간 (histogram, 초)
pub const SCAN_DURATION_SECONDS: &str = "repscan_scan_duration_seconds";

// ─── 배치 메트릭 ────────────────────────────────────────────────────

/// 배치에서 스캔한 주소 수 (counter, label: risk_level)
pub const BATCH_ADDRESSES_TOTAL: &str = "repscan_batch_addresses_total";

/// 배치 입력에서 건너뛴 줄 수 (counter)
pub const BATCH_LINES_SKIPPED_TOTAL: &str = "repscan_batch_lines_skipped_total";

// ─── 설명 등록 함수 ─────────────────────────────────────────────────

/// 모든 메트릭의 설명(description)을 등록합니다.
///
/// 전역 레코더 설치 후 한 번만 호출해야 합니다.
pub fn describe_all() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!(
        SCANS_COMPLETED_TOTAL,
        "Total number of reputation scans completed"
    );
    describe_counter!(
        CHECK_RESULTS_TOTAL,
        "Check results recorded per check name and status"
    );
    describe_counter!(
        CHECK_TIMEOUTS_TOTAL,
        "Total number of checks that exceeded the per-check timeout"
    );
    describe_counter!(
        CHECK_FAILURES_TOTAL,
        "Total number of checks that panicked or failed to report a valid result"
    );
    describe_histogram!(
        SCAN_DURATION_SECONDS,
        "Time to complete a single reputation scan in seconds"
    );
    describe_counter!(
        BATCH_ADDRESSES_TOTAL,
        "Total number of addresses scanned in batch mode"
    );
    describe_counter!(
        BATCH_LINES_SKIPPED_TOTAL,
        "Total number of batch input lines skipped as non-addresses"
    );
}
