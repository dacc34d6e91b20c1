//! Contract Check / Contract Verification 검사
//!
//! 두 검사 모두 체인 조회나 탐색기 API 연동 없이 `warning/50`을 반환합니다.
//! Verification 검사는 API 키 유무에 따라 설명만 달라집니다.

use std::sync::Arc;

use repscan_core::pipeline::BoxFuture;

use super::{Check, CheckOutcome};
use crate::credentials::ApiKeyProvider;

/// Contract Check 검사 이름
pub const CONTRACT_NAME: &str = "Contract Check";

/// Contract Verification 검사 이름
pub const VERIFICATION_NAME: &str = "Contract Verification";

/// 주소가 컨트랙트인지 확인하는 검사
///
/// RPC 연결이 없으므로 외부에서 확인하는 방법을 안내합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractCheck;

impl Check for ContractCheck {
    fn name(&self) -> &str {
        CONTRACT_NAME
    }

    fn evaluate<'a>(&'a self, address: &'a str, _network: &'a str) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(async move {
            CheckOutcome::warning(format!(
                "Requires RPC connection (see: cast code {address})"
            ))
        })
    }
}

/// 블록 탐색기 소스 코드 검증 여부 검사
pub struct VerificationCheck {
    keys: Arc<dyn ApiKeyProvider>,
}

impl VerificationCheck {
    /// API 키 제공자로 검사를 생성합니다.
    pub fn new(keys: Arc<dyn ApiKeyProvider>) -> Self {
        Self { keys }
    }
}

impl Check for VerificationCheck {
    fn name(&self) -> &str {
        VERIFICATION_NAME
    }

    fn evaluate<'a>(&'a self, _address: &'a str, network: &'a str) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(async move {
            match self.keys.api_key(network) {
                Some(_) => CheckOutcome::warning(format!(
                    "Explorer API key configured for {network}; verification lookup not yet integrated"
                )),
                None => CheckOutcome::warning(format!("No API key configured for {network}")),
            }
        })
    }
}
