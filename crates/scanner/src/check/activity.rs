//! Account Age / Transaction Volume 검사
//!
//! 블록체인 조회가 필요한 자리 표시 검사입니다. 항상 `warning/50`입니다.

use repscan_core::pipeline::BoxFuture;

use super::{Check, CheckOutcome};

/// Account Age 검사 이름
pub const ACCOUNT_AGE_NAME: &str = "Account Age";

/// Transaction Volume 검사 이름
pub const TX_VOLUME_NAME: &str = "Transaction Volume";

/// 첫 트랜잭션 시점 기반 계정 나이 검사
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountAgeCheck;

impl Check for AccountAgeCheck {
    fn name(&self) -> &str {
        ACCOUNT_AGE_NAME
    }

    fn evaluate<'a>(&'a self, address: &'a str, _network: &'a str) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(async move {
            CheckOutcome::warning(format!(
                "Requires blockchain query (see: cast nonce {address})"
            ))
        })
    }
}

/// 활동량 검사
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionVolumeCheck;

impl Check for TransactionVolumeCheck {
    fn name(&self) -> &str {
        TX_VOLUME_NAME
    }

    fn evaluate<'a>(&'a self, _address: &'a str, _network: &'a str) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(async { CheckOutcome::warning("Requires blockchain query") })
    }
}
