//! Known Patterns 검사 -- 악성 주소 거부 목록 매칭
//!
//! 거부 목록은 설정에서 주입됩니다. 매칭은 대소문자를 무시한 부분 문자열 비교입니다.

use super::{Check, CheckOutcome};
use repscan_core::config::ZERO_ADDRESS;
use repscan_core::pipeline::BoxFuture;

/// 검사 이름
pub const NAME: &str = "Known Patterns";

/// 알려진 악성 주소 패턴 목록
///
/// 생성 시 모든 패턴을 소문자로 정규화하고 빈 패턴은 버립니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDenyList {
    patterns: Vec<String>,
}

impl PatternDenyList {
    /// 패턴 목록으로 거부 목록을 생성합니다.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { patterns }
    }

    /// 빈 거부 목록
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// 주소에 포함된 첫 번째 패턴을 반환합니다.
    pub fn find_match(&self, address: &str) -> Option<&str> {
        let lower = address.to_lowercase();
        self.patterns
            .iter()
            .find(|p| lower.contains(p.as_str()))
            .map(String::as_str)
    }

    /// 등록된 패턴 수
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// 패턴이 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternDenyList {
    /// 소각(zero) 주소 하나만 담은 기본 목록
    fn default() -> Self {
        Self::new([ZERO_ADDRESS])
    }
}

/// 알려진 악성 패턴 검사
#[derive(Debug, Clone, Default)]
pub struct KnownPatternsCheck {
    deny_list: PatternDenyList,
}

impl KnownPatternsCheck {
    /// 거부 목록으로 검사를 생성합니다.
    pub fn new(deny_list: PatternDenyList) -> Self {
        Self { deny_list }
    }

    /// 사용 중인 거부 목록
    pub fn deny_list(&self) -> &PatternDenyList {
        &self.deny_list
    }
}

impl Check for KnownPatternsCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn quick(&self) -> bool {
        true
    }

    fn evaluate<'a>(&'a self, address: &'a str, _network: &'a str) -> BoxFuture<'a, CheckOutcome> {
        Box::pin(async move {
            match self.deny_list.find_match(address) {
                Some(pattern) => {
                    tracing::debug!(address, pattern, "address matches malicious pattern");
                    CheckOutcome::fail("Matches known malicious pattern")
                }
                None => CheckOutcome::pass("No known malicious patterns detected"),
            }
        })
    }
}
