use super::ResponseError;
use assert_impl::assert_impl;
use http::{
    header::{HeaderMap, HeaderName, HeaderValue},
    status::StatusCode,
    Version,
};
use std::{mem::take, result};

/// HTTP 响应
///
/// 响应体已完整读入内存
#[derive(Debug, Default, Clone)]
pub struct Response {
    status_code: StatusCode,
    version: Version,
    headers: HeaderMap,
    body: Vec<u8>,
}

/// HTTP 响应结果
pub type Result = result::Result<Response, ResponseError>;

impl Response {
    /// 创建 HTTP 响应构建器
    #[inline]
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// HTTP 状态码
    #[inline]
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// 修改 HTTP 状态码
    #[inline]
    pub fn status_code_mut(&mut self) -> &mut StatusCode {
        &mut self.status_code
    }

    /// HTTP 版本
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// HTTP Headers
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// 修改 HTTP Headers
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// 获取 HTTP 响应 Header
    #[inline]
    pub fn header(&self, header_name: &HeaderName) -> Option<&HeaderValue> {
        self.headers.get(header_name)
    }

    /// HTTP 响应体
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// 修改 HTTP 响应体
    #[inline]
    pub fn body_mut(&mut self) -> &mut Vec<u8> {
        &mut self.body
    }

    /// 转换为 HTTP 响应体
    #[inline]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    #[allow(dead_code)]
    fn assert() {
        assert_impl!(Send: Self);
        assert_impl!(Sync: Self);
    }
}

/// HTTP 响应构建器
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    inner: Response,
}

impl ResponseBuilder {
    /// 设置 HTTP 状态码
    #[inline]
    pub fn status_code(&mut self, status_code: StatusCode) -> &mut Self {
        self.inner.status_code = status_code;
        self
    }

    /// 设置 HTTP 版本
    #[inline]
    pub fn version(&mut self, version: Version) -> &mut Self {
        self.inner.version = version;
        self
    }

    /// 设置 HTTP Headers
    #[inline]
    pub fn headers(&mut self, headers: HeaderMap) -> &mut Self {
        self.inner.headers = headers;
        self
    }

    /// 添加 HTTP Header
    #[inline]
    pub fn header(&mut self, header_name: HeaderName, header_value: HeaderValue) -> &mut Self {
        self.inner.headers.append(header_name, header_value);
        self
    }

    /// 设置 HTTP 响应体
    #[inline]
    pub fn body(&mut self, body: impl Into<Vec<u8>>) -> &mut Self {
        self.inner.body = body.into();
        self
    }

    /// 构建 HTTP 响应
    #[inline]
    pub fn build(&mut self) -> Response {
        take(&mut self.inner)
    }
}
