use super::{super::Request, Retrier};
use std::time::Duration;

/// 永不重试的重试器
#[derive(Default, Copy, Clone, Debug)]
pub struct NeverRetrier;

impl Retrier for NeverRetrier {
    #[inline]
    fn retryable(&self, _request: &Request) -> bool {
        false
    }

    #[inline]
    fn delay(&self, _request: &Request) -> Duration {
        Duration::ZERO
    }
}
