//! 배치 스캔 -- 주소 목록을 quick 스캔으로 순차 처리
//!
//! 입력 파일 읽기와 결과 저장은 호출자(CLI)의 책임입니다.
//! 이 모듈은 텍스트 파싱, 스로틀 적용, 결과 집계만 담당합니다.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use repscan_core::metrics as m;
use repscan_core::types::RiskLevel;

use crate::report::ReputationReport;
use crate::scanner::ReputationScanner;
use crate::throttle::Throttle;

/// 파싱된 주소 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressList {
    /// 스캔할 주소 (입력 순서)
    pub addresses: Vec<String>,
    /// `0x`로 시작하지 않아 건너뛴 줄 수 (빈 줄 제외)
    pub skipped: usize,
}

impl AddressList {
    /// 스캔할 주소 수
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// 스캔할 주소가 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// 한 줄에 하나씩 적힌 주소 목록을 파싱합니다.
///
/// 각 줄의 앞뒤 공백을 제거하고, 빈 줄과 `0x`로 시작하지 않는 줄은 건너뜁니다.
/// 형식 검증은 하지 않습니다 (Address Format 검사의 역할).
pub fn parse_address_list(text: &str) -> AddressList {
    let mut list = AddressList::default();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !line.starts_with("0x") {
            warn!(line = index + 1, "skipping line without 0x prefix");
            list.skipped += 1;
            continue;
        }
        list.addresses.push(line.to_owned());
    }

    if list.skipped > 0 {
        metrics::counter!(m::BATCH_LINES_SKIPPED_TOTAL)
            .increment(u64::try_from(list.skipped).unwrap_or(u64::MAX));
    }
    list
}

/// 배치 결과 요약 -- 위험 등급별 주소 수
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// 스캔한 주소 수
    pub scanned: usize,
    /// 건너뛴 줄 수
    pub skipped: usize,
    /// 위험 등급별 주소 수
    pub by_risk: BTreeMap<RiskLevel, usize>,
}

impl BatchSummary {
    /// 보고서 하나를 집계에 추가합니다.
    pub fn record(&mut self, report: &ReputationReport) {
        self.scanned += 1;
        *self.by_risk.entry(report.risk_level()).or_insert(0) += 1;
    }

    /// 위험 등급의 주소 수
    pub fn count(&self, level: RiskLevel) -> usize {
        self.by_risk.get(&level).copied().unwrap_or(0)
    }
}

/// 배치 스캔 결과
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// 입력 순서대로의 보고서
    pub reports: Vec<ReputationReport>,
    /// 요약
    pub summary: BatchSummary,
}

/// 배치 스캔 드라이버
///
/// 주소마다 독립된 quick 스캔을 실행하고 주소 사이에 스로틀을 적용합니다.
pub struct BatchScanner<'a> {
    scanner: &'a ReputationScanner,
    throttle: Box<dyn Throttle>,
}

impl<'a> BatchScanner<'a> {
    /// 스캐너와 스로틀로 생성합니다.
    pub fn new(scanner: &'a ReputationScanner, throttle: Box<dyn Throttle>) -> Self {
        Self { scanner, throttle }
    }

    /// 목록의 모든 주소를 스캔합니다.
    ///
    /// `on_report`는 보고서가 나올 때마다 입력 순서대로 호출됩니다.
    /// 스로틀은 연속된 두 주소 사이에만 적용되며 마지막 주소 뒤에는 대기하지 않습니다.
    pub async fn run<F>(&self, list: &AddressList, network: &str, mut on_report: F) -> BatchOutcome
    where
        F: FnMut(&ReputationReport),
    {
        info!(
            addresses = list.len(),
            skipped = list.skipped,
            network,
            "starting batch scan"
        );

        let mut reports = Vec::with_capacity(list.len());
        let mut summary = BatchSummary {
            skipped: list.skipped,
            ..BatchSummary::default()
        };

        for (index, address) in list.addresses.iter().enumerate() {
            if index > 0 {
                self.throttle.pause().await;
            }

            let report = self.scanner.run_quick_scan(address, network).await;
            metrics::counter!(
                m::BATCH_ADDRESSES_TOTAL,
                m::LABEL_RISK_LEVEL => report.risk_level().as_str()
            )
            .increment(1);

            summary.record(&report);
            on_report(&report);
            reports.push(report);
        }

        info!(
            scanned = summary.scanned,
            critical = summary.count(RiskLevel::Critical),
            "batch scan completed"
        );

        BatchOutcome { reports, summary }
    }
}
