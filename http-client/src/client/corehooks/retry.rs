use super::super::{Hook, Request};

/// 重试计数钩子名称
pub const INCREASE_RETRY_COUNT_HOOK_NAME: &str = "core.increase_retry_count";

/// 创建重试计数钩子
pub fn increase_retry_count_hook() -> Hook {
    Hook::new(INCREASE_RETRY_COUNT_HOOK_NAME, |request: &mut Request| {
        request.retried_mut().increase()
    })
}
