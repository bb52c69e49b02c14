use super::{
    super::{Request, Temporary},
    Retrier,
};
use log::debug;
use rand::{thread_rng, Rng};
use std::time::Duration;

/// 默认重试器
///
/// 仅当请求配置了重试，重试次数和总耗时均未超出限制，且错误为临时性错误时才会重试。
/// 等待时长为初始等待时长上下浮动抖动比例后的随机值。
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRetrier;

impl Retrier for DefaultRetrier {
    fn retryable(&self, request: &Request) -> bool {
        let Some(config) = request.retry_config() else {
            return false;
        };
        if config.max_retries() == 0 || request.retried().retried_total() >= config.max_retries() {
            return false;
        }
        let elapsed = request.retried().elapsed();
        if elapsed > config.max_elapsed_time() {
            debug!(
                "{}: elapsed {:?} exceeds {:?}, stop retrying",
                request.operation().name(),
                elapsed,
                config.max_elapsed_time()
            );
            return false;
        }
        request.error().and_then(|err| err.temporary()).unwrap_or(false)
    }

    fn delay(&self, request: &Request) -> Duration {
        request.retry_config().map_or(Duration::ZERO, |config| {
            randomized_delay(config.initial_delay(), config.jitter())
        })
    }
}

/// 在 `[delay * (1 - jitter), delay * (1 + jitter)]` 区间内均匀随机取值
///
/// `jitter` 为 0 时直接返回 `delay`
pub(super) fn randomized_delay(delay: Duration, jitter: f64) -> Duration {
    if jitter <= 0.0 || delay.is_zero() {
        return delay;
    }
    let nanos = delay.as_nanos() as f64;
    let minified = (nanos * (1.0 - jitter)).ceil() as u64;
    let magnified = (nanos * (1.0 + jitter)).floor() as u64;
    if minified >= magnified {
        return delay;
    }
    Duration::from_nanos(thread_rng().gen_range(minified..=magnified))
}
