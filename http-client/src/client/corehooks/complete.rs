use super::super::{Hook, Request};
use log::{debug, info};

/// 结果日志钩子名称
pub const LOG_RESULT_HOOK_NAME: &str = "core.log_result";

/// 创建结果日志钩子
pub fn log_result_hook() -> Hook {
    Hook::new(LOG_RESULT_HOOK_NAME, log_result)
}

fn log_result(request: &mut Request) {
    let url = request.url().map_or_else(|| "<no url>".to_owned(), |url| url.to_string());
    match request.error() {
        Some(err) => info!(
            "{} {} {} failed, retried: {}, request id: {}, error: {}",
            request.operation().name(),
            request.method(),
            url,
            request.retried(),
            request.request_id().unwrap_or("-"),
            err
        ),
        None => debug!(
            "{} {} {} done, status: {}, retried: {}, request id: {}",
            request.operation().name(),
            request.method(),
            url,
            request.status_code(),
            request.retried(),
            request.request_id().unwrap_or("-"),
        ),
    }
}
