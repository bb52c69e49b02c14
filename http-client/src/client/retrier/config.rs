use std::time::Duration;

const MAX_JITTER: f64 = 1.0 - f64::EPSILON;

/// 重试配置
///
/// 所有字段均为零值时表示不重试
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RetryConfig {
    max_retries: usize,
    initial_delay: Duration,
    jitter: f64,
    max_elapsed_time: Duration,
}

impl RetryConfig {
    /// 创建重试配置
    ///
    /// `jitter` 会被限制在 `[0, 1)` 区间内
    #[inline]
    pub fn new(max_retries: usize, initial_delay: Duration, jitter: f64, max_elapsed_time: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
            jitter: clamp_jitter(jitter),
            max_elapsed_time,
        }
    }

    /// 创建重试配置构建器
    #[inline]
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::default()
    }

    /// 获取最大重试次数
    #[inline]
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// 获取初始等待时长
    #[inline]
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// 获取抖动比例
    #[inline]
    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// 获取所有尝试的最大总耗时
    #[inline]
    pub fn max_elapsed_time(&self) -> Duration {
        self.max_elapsed_time
    }
}

fn clamp_jitter(jitter: f64) -> f64 {
    if jitter.is_nan() {
        0.0
    } else {
        jitter.clamp(0.0, MAX_JITTER)
    }
}

/// 重试配置构建器
#[derive(Debug, Clone, Default)]
pub struct RetryConfigBuilder {
    inner: RetryConfig,
}

impl RetryConfigBuilder {
    /// 设置最大重试次数
    #[inline]
    pub fn max_retries(&mut self, max_retries: usize) -> &mut Self {
        self.inner.max_retries = max_retries;
        self
    }

    /// 设置初始等待时长
    #[inline]
    pub fn initial_delay(&mut self, initial_delay: Duration) -> &mut Self {
        self.inner.initial_delay = initial_delay;
        self
    }

    /// 设置抖动比例
    ///
    /// 会被限制在 `[0, 1)` 区间内
    #[inline]
    pub fn jitter(&mut self, jitter: f64) -> &mut Self {
        self.inner.jitter = clamp_jitter(jitter);
        self
    }

    /// 设置所有尝试的最大总耗时
    #[inline]
    pub fn max_elapsed_time(&mut self, max_elapsed_time: Duration) -> &mut Self {
        self.inner.max_elapsed_time = max_elapsed_time;
        self
    }

    /// 构建重试配置
    #[inline]
    pub fn build(&self) -> RetryConfig {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_is_clamped() {
        assert_eq!(RetryConfig::builder().jitter(-0.5).build().jitter(), 0.0);
        assert_eq!(RetryConfig::builder().jitter(f64::NAN).build().jitter(), 0.0);
        assert!(RetryConfig::builder().jitter(1.5).build().jitter() < 1.0);
        assert_eq!(
            RetryConfig::new(1, Duration::from_millis(100), 0.25, Duration::from_secs(1)).jitter(),
            0.25
        );
    }

    #[test]
    fn test_default_never_retries() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries(), 0);
        assert_eq!(config.initial_delay(), Duration::ZERO);
        assert_eq!(config.max_elapsed_time(), Duration::ZERO);
    }
}
