//! 평판 스캐너 에러 타입
//!
//! [`ReputationScannerError`]는 스캐너 구성 단계에서 발생할 수 있는 에러를 나타냅니다.
//! 스캔 자체는 실패하지 않으므로(잘못된 주소는 `fail` 결과로 표현) 이 에러는
//! 설정 검증과 검사 레지스트리 구성에서만 반환됩니다.
//!
//! `From<ReputationScannerError> for RepscanError` 구현을 통해 `?` 연산자로
//! 상위 에러 타입으로 전파됩니다.

use repscan_core::error::{CheckError, RepscanError};

/// 평판 스캐너 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum ReputationScannerError {
    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },

    /// 같은 이름의 검사가 이미 등록됨
    #[error("duplicate check name: '{0}'")]
    DuplicateCheck(String),

    /// 등록된 검사가 없음
    #[error("check registry is empty")]
    EmptyRegistry,

    /// 검사 결과 계약 위반
    #[error("check contract violation: {0}")]
    Check(#[from] CheckError),
}

impl From<ReputationScannerError> for RepscanError {
    fn from(err: ReputationScannerError) -> Self {
        match err {
            ReputationScannerError::Check(e) => RepscanError::Check(e),
            other => RepscanError::Scanner(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ReputationScannerError::Config {
            field: "check_timeout_ms".to_owned(),
            reason: "must be 1-60000".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("check_timeout_ms"));
        assert!(msg.contains("1-60000"));
    }

    #[test]
    fn duplicate_check_display() {
        let err = ReputationScannerError::DuplicateCheck("Known Patterns".to_owned());
        assert!(err.to_string().contains("'Known Patterns'"));
    }

    #[test]
    fn converts_to_repscan_error() {
        let err: RepscanError = ReputationScannerError::EmptyRegistry.into();
        assert!(matches!(err, RepscanError::Scanner(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn check_error_keeps_its_variant() {
        let err: RepscanError =
            ReputationScannerError::Check(CheckError::ScoreOutOfRange { score: 120 }).into();
        assert!(matches!(
            err,
            RepscanError::Check(CheckError::ScoreOutOfRange { score: 120 })
        ));
    }
}
