//! 검사 레지스트리 -- 스캔에 사용할 검사의 순서 있는 목록
//!
//! 등록 순서가 곧 실행 순서이며 보고서의 `checks` 순서입니다.
//! 같은 이름의 검사는 등록할 수 없으므로 보고서 안에서 검사 이름은 유일합니다.

use std::sync::Arc;

use repscan_core::types::ScanMode;

use crate::check::{
    AccountAgeCheck, AddressFormatCheck, Check, ContractCheck, KnownPatternsCheck,
    PatternDenyList, TransactionVolumeCheck, VerificationCheck,
};
use crate::credentials::ApiKeyProvider;
use crate::error::ReputationScannerError;

/// 순서 있는 검사 목록
#[derive(Default, Clone)]
pub struct CheckRegistry {
    checks: Vec<Arc<dyn Check>>,
}

impl CheckRegistry {
    /// 빈 레지스트리를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 내장 검사 6개를 선언 순서대로 등록한 레지스트리를 생성합니다.
    pub fn builtin(deny_list: PatternDenyList, keys: Arc<dyn ApiKeyProvider>) -> Self {
        let checks: Vec<Arc<dyn Check>> = vec![
            Arc::new(AddressFormatCheck),
            Arc::new(ContractCheck),
            Arc::new(VerificationCheck::new(keys)),
            Arc::new(AccountAgeCheck),
            Arc::new(TransactionVolumeCheck),
            Arc::new(KnownPatternsCheck::new(deny_list)),
        ];
        Self { checks }
    }

    /// 검사를 목록 끝에 등록합니다.
    ///
    /// # Errors
    ///
    /// - 이름이 비어 있으면 `ReputationScannerError::Check`
    /// - 같은 이름이 이미 있으면 `ReputationScannerError::DuplicateCheck`
    pub fn register(&mut self, check: Arc<dyn Check>) -> Result<(), ReputationScannerError> {
        let name = check.name();
        if name.trim().is_empty() {
            return Err(repscan_core::error::CheckError::EmptyName.into());
        }
        if self.contains(name) {
            return Err(ReputationScannerError::DuplicateCheck(name.to_owned()));
        }
        self.checks.push(check);
        Ok(())
    }

    /// 이름으로 검사를 찾습니다.
    pub fn contains(&self, name: &str) -> bool {
        self.checks.iter().any(|c| c.name() == name)
    }

    /// 스캔 모드에 해당하는 검사를 등록 순서대로 반환합니다.
    ///
    /// `Full`은 모든 검사, `Quick`은 `quick()`이 참인 검사만 포함합니다.
    pub fn for_mode(&self, mode: ScanMode) -> Vec<Arc<dyn Check>> {
        self.checks
            .iter()
            .filter(|c| match mode {
                ScanMode::Full => true,
                ScanMode::Quick => c.quick(),
            })
            .cloned()
            .collect()
    }

    /// 스캔 모드에 해당하는 검사 이름 목록
    pub fn names(&self, mode: ScanMode) -> Vec<String> {
        self.for_mode(mode)
            .iter()
            .map(|c| c.name().to_owned())
            .collect()
    }

    /// 등록된 검사 수
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// 등록된 검사가 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.checks.iter().map(|c| c.name()))
            .finish()
    }
}
