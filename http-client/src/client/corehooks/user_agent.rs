use super::super::{Hook, Request};
use reqflow_http::{header::USER_AGENT as USER_AGENT_HEADER, HeaderValue};

/// User-Agent 钩子名称
pub const SET_USER_AGENT_HOOK_NAME: &str = "core.set_user_agent";

/// 默认的 User-Agent
pub const USER_AGENT: &str = concat!("reqflow-http-client/", env!("CARGO_PKG_VERSION"));

/// 创建 User-Agent 钩子
///
/// 仅在请求没有设置 User-Agent 时设置
pub fn set_user_agent_hook() -> Hook {
    Hook::new(SET_USER_AGENT_HOOK_NAME, |request: &mut Request| {
        if !request.headers().contains_key(USER_AGENT_HEADER) {
            request
                .headers_mut()
                .insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
        }
    })
}
