use std::{
    fmt,
    time::{Duration, Instant},
};

/// 重试统计信息
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RetriedStatsInfo {
    retried_total: usize,
    first_attempt_at: Instant,
}

impl Default for RetriedStatsInfo {
    #[inline]
    fn default() -> Self {
        Self {
            retried_total: 0,
            first_attempt_at: Instant::now(),
        }
    }
}

impl RetriedStatsInfo {
    /// 增加重试次数
    #[inline]
    pub fn increase(&mut self) {
        self.retried_total += 1;
    }

    /// 获取总共重试的次数
    #[inline]
    pub fn retried_total(&self) -> usize {
        self.retried_total
    }

    /// 设置总共重试的次数
    #[inline]
    pub fn set_retried_total(&mut self, retried_total: usize) {
        self.retried_total = retried_total;
    }

    /// 获取首次尝试的时间
    #[inline]
    pub fn first_attempt_at(&self) -> Instant {
        self.first_attempt_at
    }

    /// 设置首次尝试的时间
    #[inline]
    pub fn set_first_attempt_at(&mut self, first_attempt_at: Instant) {
        self.first_attempt_at = first_attempt_at;
    }

    /// 获取自首次尝试以来经过的时长
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.first_attempt_at.elapsed()
    }

    pub(super) fn reset(&mut self) {
        self.retried_total = 0;
        self.first_attempt_at = Instant::now();
    }
}

impl fmt::Display for RetriedStatsInfo {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{:?}", self.retried_total, self.elapsed())
    }
}
