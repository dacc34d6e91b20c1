//! 배치 스캔 스로틀 전략
//!
//! 외부 API rate limit을 배려하기 위해 주소 사이에 대기합니다.
//! 스로틀은 배치 드라이버의 정책이며 단일 스캔에는 영향을 주지 않습니다.

use std::time::Duration;

use repscan_core::pipeline::BoxFuture;

/// 연속된 두 스캔 사이의 대기 전략
///
/// `dyn Throttle`로 보관할 수 있도록 [`BoxFuture`]를 반환합니다.
pub trait Throttle: Send + Sync {
    /// 다음 주소를 스캔하기 전에 대기합니다.
    fn pause(&self) -> BoxFuture<'_, ()>;
}

/// 고정 시간 대기
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// 고정 지연으로 생성합니다.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// 밀리초 단위 지연으로 생성합니다.
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// 설정된 지연
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Throttle for FixedDelay {
    fn pause(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        })
    }
}

/// 대기하지 않음
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThrottle;

impl Throttle for NoThrottle {
    fn pause(&self) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }
}
