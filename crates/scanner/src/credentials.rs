//! 블록 탐색기 API 키 조회
//!
//! [`ApiKeyProvider`]는 네트워크 이름으로 API 키를 찾는 인터페이스입니다.
//! 키는 Contract Verification 검사의 설명 문구 선택에만 사용됩니다.
//!
//! # 조회 순서 (기본)
//!
//! 1. 설정 파일 `[api_keys]` 테이블 -- [`StaticApiKeys`]
//! 2. 환경변수 `{NETWORK}_API_KEY` -- [`EnvApiKeys`]

use std::collections::BTreeMap;
use std::sync::Arc;

use repscan_core::config::RepscanConfig;

/// 네트워크별 API 키 제공자
pub trait ApiKeyProvider: Send + Sync {
    /// 네트워크의 API 키를 반환합니다. 비어 있는 키는 `None`입니다.
    fn api_key(&self, network: &str) -> Option<String>;
}

/// 키가 하나도 없는 제공자
#[derive(Debug, Clone, Copy, Default)]
pub struct NoApiKeys;

impl ApiKeyProvider for NoApiKeys {
    fn api_key(&self, _network: &str) -> Option<String> {
        None
    }
}

/// 메모리에 보관된 키 목록 (네트워크 이름은 소문자로 정규화)
#[derive(Debug, Clone, Default)]
pub struct StaticApiKeys {
    keys: BTreeMap<String, String>,
}

impl StaticApiKeys {
    /// `(network, key)` 쌍으로 생성합니다.
    pub fn from_pairs<I, N, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, K)>,
        N: AsRef<str>,
        K: Into<String>,
    {
        let keys = pairs
            .into_iter()
            .map(|(network, key)| (network.as_ref().to_lowercase(), key.into()))
            .filter(|(_, key)| !key.trim().is_empty())
            .collect();
        Self { keys }
    }

    /// 설정의 `[api_keys]` 테이블로 생성합니다.
    pub fn from_config(config: &RepscanConfig) -> Self {
        Self::from_pairs(
            config
                .api_keys
                .iter()
                .map(|(network, key)| (network.as_str(), key.clone())),
        )
    }
}

impl ApiKeyProvider for StaticApiKeys {
    fn api_key(&self, network: &str) -> Option<String> {
        self.keys.get(&network.to_lowercase()).cloned()
    }
}

/// 환경변수 `{NETWORK}_API_KEY`에서 키를 읽는 제공자
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvApiKeys;

impl EnvApiKeys {
    /// 네트워크에 해당하는 환경변수 이름 (예: `ethereum` → `ETHEREUM_API_KEY`)
    pub fn var_name(network: &str) -> String {
        format!("{}_API_KEY", network.to_uppercase())
    }
}

impl ApiKeyProvider for EnvApiKeys {
    fn api_key(&self, network: &str) -> Option<String> {
        std::env::var(Self::var_name(network))
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// 여러 제공자를 순서대로 조회합니다. 처음 찾은 키를 반환합니다.
#[derive(Default)]
pub struct ApiKeyChain {
    providers: Vec<Arc<dyn ApiKeyProvider>>,
}

impl ApiKeyChain {
    /// 빈 체인을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 제공자를 체인 끝에 추가합니다.
    pub fn with(mut self, provider: Arc<dyn ApiKeyProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// 설정 파일 키 → 환경변수 순서의 기본 체인
    pub fn from_config(config: &RepscanConfig) -> Self {
        Self::new()
            .with(Arc::new(StaticApiKeys::from_config(config)))
            .with(Arc::new(EnvApiKeys))
    }
}

impl ApiKeyProvider for ApiKeyChain {
    fn api_key(&self, network: &str) -> Option<String> {
        self.providers.iter().find_map(|p| p.api_key(network))
    }
}
