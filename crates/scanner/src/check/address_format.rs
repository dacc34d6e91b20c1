//! Address Format 검사

use repscan_core::pipeline::BoxFuture;

use super::{Check, CheckOutcome};

/// 검사 이름
pub const NAME: &str = "Address Format";

/// `0x` 접두어를 포함한 주소 전체 길이
const ADDRESS_LEN: usize = 42;

/// 주소 형식 검사
///
/// `0x` 접두어와 전체 길이 42자만 확인합니다.
/// 16진수 문자 여부나 EIP-55 체크섬 대소문자는 검증하지 않습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressFormatCheck;

impl AddressFormatCheck {
    /// 주소가 형식 규칙을 만족하는지 반환합니다.
    pub fn is_well_formed(address: &str) -> bool {
        address.starts_with("0x") && address.len() == ADDRESS_LEN
    }
}

impl Check for AddressFormatCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn quick(&self) -> bool {
        true
    }

    fn evaluate<'a>(&'a self, address: &'a str, _network: &'a str) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(async move {
            if Self::is_well_formed(address) {
                CheckOutcome::pass("Valid address format")
            } else {
                CheckOutcome::fail("Invalid Ethereum address format")
            }
        })
    }
}
