//! 설정 관리 -- repscan.toml 파싱 및 런타임 설정
//!
//! [`RepscanConfig`]는 모든 섹션의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`REPSCAN_SCANNER_CHECK_TIMEOUT_MS=2000` 형식)
//! 3. 설정 파일 (`repscan.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), repscan_core::error::RepscanError> {
//! use repscan_core::config::RepscanConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = RepscanConfig::load("repscan.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = RepscanConfig::parse("[scanner]\nparallel_checks = true")?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, RepscanError};

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "repscan.toml";

/// 기본 네트워크
pub const DEFAULT_NETWORK: &str = "ethereum";

/// 기본 악성 패턴 시드 (zero 주소)
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// 검사 타임아웃 상한 (ms)
const MAX_CHECK_TIMEOUT_MS: u64 = 60_000;

/// 배치 지연 상한 (ms). 명령줄 오버라이드에도 같은 상한을 적용합니다.
pub const MAX_BATCH_DELAY_MS: u64 = 60_000;

/// repscan 통합 설정
///
/// `repscan.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepscanConfig {
    /// 일반 설정 (로깅)
    #[serde(default)]
    pub general: GeneralConfig,
    /// 스캐너 설정
    #[serde(default)]
    pub scanner: ScannerConfig,
    /// 배치 스캔 설정
    #[serde(default)]
    pub batch: BatchConfig,
    /// 네트워크별 블록 탐색기 API 키
    #[serde(default)]
    pub api_keys: BTreeMap<String, String>,
}

impl RepscanConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    ///
    /// 파일이 없으면 `ConfigError::FileNotFound`를 반환합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RepscanError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// [`load`](Self::load)와 같지만, 파일이 없으면 기본값에서 시작합니다.
    ///
    /// 기본 경로(`repscan.toml`)처럼 사용자가 명시하지 않은 경로에 사용합니다.
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self, RepscanError> {
        let path = path.as_ref();
        let mut config = match Self::from_file(path).await {
            Ok(config) => config,
            Err(RepscanError::Config(ConfigError::FileNotFound { .. })) => {
                debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            Err(e) => return Err(e),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, RepscanError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RepscanError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                RepscanError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, RepscanError> {
        toml::from_str(toml_str).map_err(|e| {
            RepscanError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `REPSCAN_{SECTION}_{FIELD}`
    /// 예: `REPSCAN_BATCH_DELAY_MS=500`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "REPSCAN_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "REPSCAN_GENERAL_LOG_FORMAT");

        // Scanner
        override_string(
            &mut self.scanner.default_network,
            "REPSCAN_SCANNER_DEFAULT_NETWORK",
        );
        override_u64(
            &mut self.scanner.check_timeout_ms,
            "REPSCAN_SCANNER_CHECK_TIMEOUT_MS",
        );
        override_bool(
            &mut self.scanner.parallel_checks,
            "REPSCAN_SCANNER_PARALLEL_CHECKS",
        );
        override_csv(
            &mut self.scanner.malicious_patterns,
            "REPSCAN_SCANNER_MALICIOUS_PATTERNS",
        );

        // Batch
        override_u64(&mut self.batch.delay_ms, "REPSCAN_BATCH_DELAY_MS");
        override_string(&mut self.batch.network, "REPSCAN_BATCH_NETWORK");
        override_string(&mut self.batch.output_file, "REPSCAN_BATCH_OUTPUT_FILE");
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), RepscanError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        if self.scanner.default_network.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scanner.default_network".to_owned(),
                reason: "must not be empty".to_owned(),
            }
            .into());
        }

        if self.scanner.check_timeout_ms == 0 || self.scanner.check_timeout_ms > MAX_CHECK_TIMEOUT_MS
        {
            return Err(ConfigError::InvalidValue {
                field: "scanner.check_timeout_ms".to_owned(),
                reason: format!("must be 1-{MAX_CHECK_TIMEOUT_MS}"),
            }
            .into());
        }

        // 빈 패턴은 모든 주소에 부분 문자열로 매칭되므로 허용하지 않음
        if self
            .scanner
            .malicious_patterns
            .iter()
            .any(|p| p.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "scanner.malicious_patterns".to_owned(),
                reason: "patterns must not be empty strings".to_owned(),
            }
            .into());
        }

        if self.batch.delay_ms > MAX_BATCH_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "batch.delay_ms".to_owned(),
                reason: format!("must be 0-{MAX_BATCH_DELAY_MS}"),
            }
            .into());
        }

        if self.batch.network.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "batch.network".to_owned(),
                reason: "must not be empty".to_owned(),
            }
            .into());
        }

        if self.batch.output_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "batch.output_file".to_owned(),
                reason: "must not be empty".to_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 스캐너 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// 네트워크 인자가 없을 때 사용할 네트워크
    pub default_network: String,
    /// 검사 하나당 타임아웃 (ms)
    pub check_timeout_ms: u64,
    /// 검사 병렬 실행 여부 (결과 순서는 항상 선언 순서)
    pub parallel_checks: bool,
    /// 알려진 악성 주소 패턴 (부분 문자열, 대소문자 무시)
    pub malicious_patterns: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            default_network: DEFAULT_NETWORK.to_owned(),
            check_timeout_ms: 5_000,
            parallel_checks: false,
            malicious_patterns: vec![ZERO_ADDRESS.to_owned()],
        }
    }
}

/// 배치 스캔 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// 주소 사이 지연 (ms)
    pub delay_ms: u64,
    /// 배치 스캔 네트워크
    pub network: String,
    /// 결과 JSON 파일 경로
    pub output_file: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 200,
            network: DEFAULT_NETWORK.to_owned(),
            output_file: "reputation-results.json".to_owned(),
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_bool(target: &mut bool, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<bool>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse bool from env var, ignoring"
            ),
        }
    }
}

fn override_u64(target: &mut u64, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<u64>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse u64 from env var, ignoring"
            ),
        }
    }
}

fn override_csv(target: &mut Vec<String>, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect();
    }
}
