mod config;
mod default;
mod never;

pub use config::{RetryConfig, RetryConfigBuilder};
pub use default::DefaultRetrier;
pub use never::NeverRetrier;

use super::Request;
use dyn_clonable::clonable;
use std::{fmt::Debug, time::Duration};

/// 重试器
///
/// 判断一次失败的尝试是否可以重试，并计算下一次尝试前需要等待的时长。
#[clonable]
pub trait Retrier: Clone + Debug + Send + Sync {
    /// 是否可以重试
    fn retryable(&self, request: &Request) -> bool;

    /// 下一次尝试前需要等待的时长
    fn delay(&self, request: &Request) -> Duration;
}
