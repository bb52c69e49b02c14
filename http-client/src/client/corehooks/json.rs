use super::super::{Hook, Request, ResponseError, ResponseErrorKind};
use reqflow_http::{header::CONTENT_TYPE, HeaderValue};
use serde::{de::DeserializeOwned, Serialize};

/// JSON 响应解析钩子名称
pub const DECODE_JSON_HOOK_NAME: &str = "core.decode_json";

/// JSON 请求体序列化钩子名称
pub const JSON_BODY_HOOK_NAME: &str = "core.json_body";

/// 创建 JSON 响应解析钩子
///
/// 应当注册在 Unmarshal 阶段。将响应体解析为 `T` 并保存在请求上下文的扩展信息中，可以通过 [`Request::data`] 获取。
/// 没有响应或响应体为空时不做任何处理，解析失败时记录 [`ResponseErrorKind::ParseResponseError`]。
pub fn decode_json_hook<T: DeserializeOwned + Send + Sync + 'static>() -> Hook {
    Hook::new(DECODE_JSON_HOOK_NAME, |request: &mut Request| {
        let result = match request.response() {
            Some(response) if !response.body().is_empty() => serde_json::from_slice::<T>(response.body())
                .map_err(|err| {
                    ResponseError::new(ResponseErrorKind::ParseResponseError, err)
                        .status_code(response.status_code())
                        .response_body_sample(response.body())
                }),
            _ => return,
        };
        match result {
            Ok(data) => {
                request.extensions_mut().insert(data);
            }
            Err(err) => request.set_error(err),
        }
    })
}

/// 创建 JSON 请求体序列化钩子
///
/// 应当注册在 Build 阶段。将 `value` 序列化为 JSON 作为请求体，并设置 `Content-Type: application/json`。
/// 序列化失败时记录 [`ResponseErrorKind::BuildError`]。
pub fn json_body_hook<T: Serialize + Send + Sync + 'static>(value: T) -> Hook {
    Hook::new(JSON_BODY_HOOK_NAME, move |request: &mut Request| {
        match serde_json::to_vec(&value) {
            Ok(body) => {
                request.set_body(body);
                request
                    .headers_mut()
                    .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            Err(err) => request.set_error(ResponseError::new(ResponseErrorKind::BuildError, err)),
        }
    })
}
