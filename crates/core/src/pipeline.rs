//! 비동기 확장 포인트를 위한 공통 타입

use std::future::Future;
use std::pin::Pin;

/// `dyn` 호환 trait에서 사용하는 boxed future
///
/// `async fn`을 가진 trait은 `dyn` 호환이 아니므로, 트레이트 객체로 보관해야 하는
/// 확장 포인트(예: 배치 스로틀)는 이 타입을 반환합니다.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed_answer() -> BoxFuture<'static, u32> {
        Box::pin(async { 42 })
    }

    #[tokio::test]
    async fn box_future_is_awaitable() {
        assert_eq!(boxed_answer().await, 42);
    }
}
