#![cfg_attr(feature = "docs", feature(doc_cfg))]
#![deny(
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

//! # reqflow-http
//!
//! ## HTTP 接口库
//!
//! 为请求流水线定义 HTTP 传输接口 [`HttpCaller`]，以及传输层使用的请求、响应与错误类型。
//! 该库本身不发送任何网络请求，具体实现由 `reqflow-ureq` 等库提供。

mod error;
mod request;
mod response;

pub use error::{Error as ResponseError, ErrorBuilder as ResponseErrorBuilder, ErrorKind as ResponseErrorKind};
pub use http::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    method::Method,
    status::StatusCode,
    Extensions, Version,
};
pub use request::{Request, RequestBuilder};
pub use response::{Response, ResponseBuilder, Result as ResponseResult};
pub use url::{self, Url};

use auto_impl::auto_impl;
use std::fmt::Debug;

/// 默认 UserAgent 前缀
pub const LIBRARY_USER_AGENT: &str = concat!("reqflow-http/", env!("CARGO_PKG_VERSION"));

/// HTTP 请求处理接口
///
/// 实现该接口，即可处理请求流水线发出的所有 HTTP 请求。
/// 同一个实例会被多个请求同时使用，因此实现必须是线程安全的。
#[auto_impl(&, Box, Arc)]
pub trait HttpCaller: Debug + Send + Sync {
    /// 阻塞发送 HTTP 请求
    ///
    /// 只要收到了响应（包括 4xx / 5xx 状态码），都应该返回 `Ok`，
    /// 状态码的处理由调用方决定。
    fn call(&self, request: &Request) -> ResponseResult;
}
