use super::super::{Hook, Request, ResponseError, ResponseErrorKind};
use reqflow_http::Request as HttpRequest;

/// 发送请求钩子名称
pub const SEND_HOOK_NAME: &str = "core.send";

/// 响应状态码校验钩子名称
pub const VALIDATE_RESPONSE_HOOK_NAME: &str = "core.validate_response";

/// 创建发送请求钩子
///
/// 使用配置中的 HTTP 客户端发送请求，成功时保存响应。
/// HTTP 客户端返回错误时不保存响应，记录 [`ResponseErrorKind::HttpError`]，是否为临时性错误由 HTTP 客户端决定。
pub fn send_hook() -> Hook {
    Hook::new(SEND_HOOK_NAME, send)
}

/// 创建响应状态码校验钩子
///
/// 状态码大于等于 400 时记录 [`ResponseErrorKind::StatusCodeError`]
pub fn validate_response_hook() -> Hook {
    Hook::new(VALIDATE_RESPONSE_HOOK_NAME, validate_response)
}

fn send(request: &mut Request) {
    let http_request = match make_http_request(request) {
        Ok(http_request) => http_request,
        Err(err) => {
            request.set_error(err);
            return;
        }
    };
    let result = match request.config().http_caller() {
        Some(http_caller) => http_caller.call(&http_request),
        None => {
            request.set_error(ResponseError::new_with_msg(
                ResponseErrorKind::BuildError,
                "no http caller is configured",
            ));
            return;
        }
    };
    match result {
        Ok(response) => request.set_response(response),
        Err(err) => {
            request.take_response();
            request.set_error(err.into());
        }
    }
}

fn make_http_request(request: &Request) -> Result<HttpRequest, ResponseError> {
    let url = request
        .url()
        .ok_or_else(|| ResponseError::new_with_msg(ResponseErrorKind::BuildError, "request has no url"))?;
    Ok(HttpRequest::builder(url.to_owned())
        .method(request.method().to_owned())
        .headers(request.headers().to_owned())
        .body(request.body())
        .follow_redirects(!request.config().disable_follow_redirects())
        .timeout(request.config().timeout())
        .build())
}

fn validate_response(request: &mut Request) {
    let err = match request.response() {
        Some(response) if response.status_code().as_u16() >= 400 => ResponseError::from_unexpected_response(response),
        _ => return,
    };
    request.set_error(err);
}
