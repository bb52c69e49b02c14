use super::super::{Hook, Request, ResponseError, ResponseErrorKind};
use rand::{thread_rng, Rng};
use reqflow_http::HeaderValue;

/// 请求 ID 钩子名称
pub const SET_REQUEST_ID_HOOK_NAME: &str = "core.set_request_id";

/// 请求 ID 的 HTTP Header 名称
pub const X_REQUEST_ID_HEADER_NAME: &str = "x-request-id";

/// 生成随机请求 ID
///
/// 返回 24 个十六进制字符
pub fn generate_request_id() -> String {
    let mut bytes = [0u8; 12];
    thread_rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// 创建请求 ID 钩子
///
/// 首次构建请求时调用 `generator` 生成请求 ID，重试时沿用同一个 ID，并写入 `X-Request-Id` Header。
pub fn set_request_id_hook(generator: impl Fn() -> String + Send + Sync + 'static) -> Hook {
    Hook::new(SET_REQUEST_ID_HOOK_NAME, move |request: &mut Request| {
        let request_id = match request.request_id() {
            Some(request_id) => request_id.to_owned(),
            None => generator(),
        };
        match HeaderValue::from_str(&request_id) {
            Ok(header_value) => {
                request.headers_mut().insert(X_REQUEST_ID_HEADER_NAME, header_value);
                request.set_request_id(request_id);
            }
            Err(err) => request.set_error(ResponseError::new(ResponseErrorKind::BuildError, err)),
        }
    })
}
