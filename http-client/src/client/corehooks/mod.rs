//! 内置钩子
//!
//! [`default_hooks`] 提供的钩子集合包含端点校验，请求 ID，User-Agent，发送请求，响应状态码校验，
//! 重试计数和结果日志等基础行为。所有内置钩子都是具名钩子，可以通过名称从钩子链中删除。

mod complete;
mod json;
mod request_id;
mod retry;
mod send;
mod user_agent;
mod validate;

pub use super::request::add_scheme;
pub use complete::{log_result_hook, LOG_RESULT_HOOK_NAME};
pub use json::{decode_json_hook, json_body_hook, DECODE_JSON_HOOK_NAME, JSON_BODY_HOOK_NAME};
pub use request_id::{generate_request_id, set_request_id_hook, SET_REQUEST_ID_HOOK_NAME, X_REQUEST_ID_HEADER_NAME};
pub use retry::{increase_retry_count_hook, INCREASE_RETRY_COUNT_HOOK_NAME};
pub use send::{send_hook, validate_response_hook, SEND_HOOK_NAME, VALIDATE_RESPONSE_HOOK_NAME};
pub use user_agent::{set_user_agent_hook, SET_USER_AGENT_HOOK_NAME, USER_AGENT};
pub use validate::{validate_endpoint_hook, VALIDATE_ENDPOINT_HOOK_NAME};

use super::Hooks;

/// 创建默认的钩子集合
pub fn default_hooks() -> Hooks {
    let mut hooks = Hooks::new();
    hooks.validate_mut().push_back_hook(validate_endpoint_hook());
    hooks
        .build_mut()
        .push_back_hook(set_request_id_hook(generate_request_id))
        .push_back_hook(set_user_agent_hook());
    hooks
        .send_mut()
        .push_back_hook(send_hook())
        .push_back_hook(validate_response_hook());
    hooks.retry_mut().push_back_hook(increase_retry_count_hook());
    hooks.complete_mut().push_back_hook(log_result_hook());
    hooks
}
