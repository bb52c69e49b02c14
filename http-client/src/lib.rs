#![cfg_attr(feature = "docs", feature(doc_cfg))]
#![deny(
    single_use_lifetimes,
    missing_debug_implementations,
    anonymous_parameters,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    meta_variable_misuse,
    missing_docs,
    non_ascii_idents,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications
)]

//! # reqflow-http-client
//!
//! ## 基于钩子的 HTTP 请求流水线
//!
//! 一次 HTTP 调用依次经过 Validate，Build，Send，Unmarshal，Retry，Complete 六个阶段，
//! 每个阶段都可以注册有序的钩子函数来扩展行为。
//!
//! 请求失败且错误为临时性错误时，流水线会根据重试配置等待一段带抖动的时长后，从 Build 阶段重新开始。
//! 无论成功还是失败，Complete 阶段都会且仅会被执行一次。
//!
//! ### 代码示例
//!
//! ```no_run
//! use reqflow_http_client::{corehooks, Client, Config, Method, Operation};
//!
//! # fn example() -> reqflow_http_client::ApiResult<()> {
//! let client = Client::builder(Config::builder().endpoint("jsonplaceholder.typicode.com").build()).build();
//! let mut hooks = client.hooks().to_owned();
//! hooks.unmarshal_mut().push_back_hook(corehooks::decode_json_hook::<serde_json::Value>());
//! let mut request = client.new_request_with_hooks(
//!     Operation::builder("GetPost").method(Method::GET).path("/posts/10").build(),
//!     hooks,
//! );
//! request.send()?;
//! println!("{:?}", request.data::<serde_json::Value>());
//! # Ok(())
//! # }
//! ```

mod client;

#[cfg(test)]
mod test_utils;

pub use client::{
    corehooks, ApiResult, Client, ClientBuilder, Config, ConfigBuilder, DefaultRetrier, Hook, HookChain, HookFn,
    Hooks, NeverRetrier, Operation, OperationBuilder, Phase, Request, ResponseError, ResponseErrorKind, RetriedStatsInfo,
    Retrier, RetryConfig, RetryConfigBuilder, Temporary, UrlBuildError,
};
pub use reqflow_http as http;
pub use reqflow_http::{HeaderMap, HeaderName, HeaderValue, HttpCaller, Method, StatusCode, Url};

#[cfg(feature = "ureq")]
#[cfg_attr(feature = "docs", doc(cfg(feature = "ureq")))]
pub use reqflow_ureq as ureq;
