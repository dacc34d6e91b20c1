//! 에러 타입 -- 도메인별 에러 정의

/// repscan 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum RepscanError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 검사 결과 계약 위반
    #[error("check error: {0}")]
    Check(#[from] CheckError),

    /// 스캐너 구성 에러 (레지스트리, 스캐너 설정)
    #[error("scanner error: {0}")]
    Scanner(String),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 검사 결과(`CheckResult`) 생성 시 계약 위반
///
/// 점수 범위, 상태 값, 이름/설명 비어있음 여부를 생성 시점에 검증합니다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// 검사 이름이 비어 있음
    #[error("check name must not be empty")]
    EmptyName,

    /// 검사 설명이 비어 있음
    #[error("details of check '{name}' must not be empty")]
    EmptyDetails { name: String },

    /// 점수가 0-100 범위를 벗어남
    #[error("score {score} out of range (must be 0-100)")]
    ScoreOutOfRange { score: u32 },

    /// 알 수 없는 상태 문자열
    #[error("unknown check status: '{0}' (expected: pass, warning, fail)")]
    UnknownStatus(String),
}
