//! 도메인 타입 -- 검사 결과, 상태, 위험 등급
//!
//! 스캐너와 CLI가 공유하는 데이터 구조를 정의합니다.
//! [`CheckResult`]는 생성 시점에 계약(점수 0-100, 상태 3종, 비어있지 않은 이름/설명)을
//! 검증하므로, 집계 로직은 이 불변식을 전제로 동작할 수 있습니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// 점수 상한
pub const MAX_SCORE: u8 = 100;

/// 관례상 `pass` 검사의 점수
pub const PASS_SCORE: u8 = 100;

/// 관례상 `warning` 검사(평가 저하 포함)의 점수
pub const WARNING_SCORE: u8 = 50;

/// 관례상 `fail` 검사의 점수
pub const FAIL_SCORE: u8 = 0;

/// 검사 상태
///
/// 세 가지 값 외에는 허용되지 않습니다. 직렬화 형식은 소문자(`"pass"`, `"warning"`, `"fail"`)입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// 검사 통과
    Pass,
    /// 경고 또는 평가 저하
    Warning,
    /// 구조적으로 유효하지 않음
    Fail,
}

impl CheckStatus {
    /// 소문자 식별자를 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warning => "warning",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 검사의 결과
///
/// 한 번의 검사 실행마다 한 번 생성되며 이후 변경되지 않습니다.
/// 필드는 비공개이며 [`CheckResult::new`]를 통해서만 생성할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCheckResult")]
pub struct CheckResult {
    name: String,
    status: CheckStatus,
    score: u8,
    details: String,
}

impl CheckResult {
    /// 계약을 검증하며 검사 결과를 생성합니다.
    ///
    /// # Errors
    ///
    /// - 이름이 비어 있으면 `CheckError::EmptyName`
    /// - 점수가 100을 초과하면 `CheckError::ScoreOutOfRange`
    /// - 설명이 비어 있으면 `CheckError::EmptyDetails`
    pub fn new(
        name: impl Into<String>,
        status: CheckStatus,
        score: u8,
        details: impl Into<String>,
    ) -> Result<Self, CheckError> {
        let name = name.into();
        let details = details.into();

        if name.trim().is_empty() {
            return Err(CheckError::EmptyName);
        }
        if score > MAX_SCORE {
            return Err(CheckError::ScoreOutOfRange {
                score: u32::from(score),
            });
        }
        if details.trim().is_empty() {
            return Err(CheckError::EmptyDetails { name });
        }

        Ok(Self {
            name,
            status,
            score,
            details,
        })
    }

    /// 평가 저하(`warning`, 50점) 결과를 생성합니다.
    ///
    /// 항상 성공합니다. 비어 있는 이름이나 설명은 고정된 대체 문자열로 채워집니다.
    /// 타임아웃, 패닉 등 검사가 정상 결과를 내지 못한 경우에 사용합니다.
    pub fn degraded(name: impl Into<String>, details: impl Into<String>) -> Self {
        let mut name = name.into();
        let mut details = details.into();
        if name.trim().is_empty() {
            name = "Unnamed Check".to_owned();
        }
        if details.trim().is_empty() {
            details = "Evaluation degraded".to_owned();
        }
        Self {
            name,
            status: CheckStatus::Warning,
            score: WARNING_SCORE,
            details,
        }
    }

    /// 검사 이름
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 검사 상태
    pub fn status(&self) -> CheckStatus {
        self.status
    }

    /// 점수 (0-100)
    pub fn score(&self) -> u8 {
        self.score
    }

    /// 설명
    pub fn details(&self) -> &str {
        &self.details
    }

    /// `fail` 상태 여부
    pub fn is_fail(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.name, self.score, self.status, self.details
        )
    }
}

/// 역직렬화 전용 중간 표현 -- 검증 후 [`CheckResult`]로 변환됩니다.
#[derive(Deserialize)]
struct RawCheckResult {
    name: String,
    status: String,
    score: u32,
    details: String,
}

impl TryFrom<RawCheckResult> for CheckResult {
    type Error = CheckError;

    fn try_from(raw: RawCheckResult) -> Result<Self, Self::Error> {
        let status = match raw.status.as_str() {
            "pass" => CheckStatus::Pass,
            "warning" => CheckStatus::Warning,
            "fail" => CheckStatus::Fail,
            other => return Err(CheckError::UnknownStatus(other.to_owned())),
        };
        let score =
            u8::try_from(raw.score).map_err(|_| CheckError::ScoreOutOfRange { score: raw.score })?;
        Self::new(raw.name, status, score, raw.details)
    }
}

/// 위험 등급
///
/// `Ord` 구현으로 위험도 비교가 가능합니다 (`Low < Medium < High < Critical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// 낮은 위험 (90점 이상)
    Low,
    /// 중간 위험 (70-89점)
    Medium,
    /// 높은 위험 (40-69점)
    High,
    /// 치명적 위험 (40점 미만)
    Critical,
}

impl RiskLevel {
    /// 모든 등급 (낮은 위험부터)
    pub const ALL: [RiskLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// 소문자 식별자를 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 스캔 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// 등록된 모든 검사
    Full,
    /// 빠른 스캔용으로 선언된 검사만 (배치 처리용)
    Quick,
}

impl ScanMode {
    /// 소문자 식별자를 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Quick => "quick",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
