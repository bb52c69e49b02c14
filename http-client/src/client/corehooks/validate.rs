use super::super::{Hook, Request, ResponseError, ResponseErrorKind};

/// 端点校验钩子名称
pub const VALIDATE_ENDPOINT_HOOK_NAME: &str = "core.validate_endpoint";

/// 创建端点校验钩子
///
/// 请求上下文中没有 URL 时记录 [`ResponseErrorKind::ValidationError`]
pub fn validate_endpoint_hook() -> Hook {
    Hook::new(VALIDATE_ENDPOINT_HOOK_NAME, validate_endpoint)
}

fn validate_endpoint(request: &mut Request) {
    if request.url().is_none() {
        request.set_error(ResponseError::new_with_msg(
            ResponseErrorKind::ValidationError,
            "missing endpoint",
        ));
    }
}
