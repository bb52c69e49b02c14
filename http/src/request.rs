use assert_impl::assert_impl;
use http::{
    header::{HeaderMap, HeaderName, HeaderValue},
    method::Method,
};
use std::{fmt, time::Duration};
use url::Url;

/// HTTP 请求
///
/// 由请求流水线的发送阶段构建，交给 [`super::HttpCaller`] 发送。
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Vec<u8>,
    follow_redirects: bool,
    timeout: Option<Duration>,
}

impl Request {
    /// 创建 HTTP 请求构建器
    #[inline]
    pub fn builder(url: Url) -> RequestBuilder {
        RequestBuilder::new(url)
    }

    /// 获取请求 HTTP 方法
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// 获取请求 HTTP 方法的可变引用
    #[inline]
    pub fn method_mut(&mut self) -> &mut Method {
        &mut self.method
    }

    /// 获取 HTTP 请求 URL
    #[inline]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// 获取 HTTP 请求 URL 的可变引用
    #[inline]
    pub fn url_mut(&mut self) -> &mut Url {
        &mut self.url
    }

    /// 获取请求 HTTP Headers
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// 获取请求 HTTP Headers 的可变引用
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// 获取请求体
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// 获取请求体的可变引用
    #[inline]
    pub fn body_mut(&mut self) -> &mut Vec<u8> {
        &mut self.body
    }

    /// 是否自动跟随重定向
    #[inline]
    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    /// 获取请求超时时长
    #[inline]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[allow(dead_code)]
    fn assert() {
        assert_impl!(Send: Self);
        assert_impl!(Sync: Self);
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .field("follow_redirects", &self.follow_redirects)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP 请求构建器
#[derive(Debug)]
pub struct RequestBuilder {
    inner: Request,
}

impl RequestBuilder {
    /// 创建 HTTP 请求构建器
    #[inline]
    pub fn new(url: Url) -> Self {
        Self {
            inner: Request {
                url,
                method: Method::GET,
                headers: Default::default(),
                body: Default::default(),
                follow_redirects: true,
                timeout: None,
            },
        }
    }

    /// 设置请求 HTTP 方法
    #[inline]
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.inner.method = method;
        self
    }

    /// 设置请求 HTTP Headers
    #[inline]
    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.inner.headers = headers;
        self
    }

    /// 添加请求 HTTP Header
    #[inline]
    #[must_use]
    pub fn header(mut self, header_name: HeaderName, header_value: HeaderValue) -> Self {
        self.inner.headers.insert(header_name, header_value);
        self
    }

    /// 设置请求体
    #[inline]
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.inner.body = body.into();
        self
    }

    /// 设置是否自动跟随重定向
    #[inline]
    #[must_use]
    pub fn follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.inner.follow_redirects = follow_redirects;
        self
    }

    /// 设置请求超时时长
    #[inline]
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.inner.timeout = timeout;
        self
    }

    /// 构建 HTTP 请求
    #[inline]
    pub fn build(self) -> Request {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, result::Result};

    #[test]
    fn test_request_builder() -> Result<(), Box<dyn Error>> {
        let request = Request::builder(Url::parse("https://example.com/foo?bar=baz")?)
            .method(Method::PUT)
            .header(HeaderName::from_static("x-foo"), HeaderValue::from_static("bar"))
            .body(b"hello".to_vec())
            .follow_redirects(false)
            .timeout(Some(Duration::from_secs(3)))
            .build();
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().as_str(), "https://example.com/foo?bar=baz");
        assert_eq!(request.headers().get("x-foo"), Some(&HeaderValue::from_static("bar")));
        assert_eq!(request.body(), b"hello");
        assert!(!request.follow_redirects());
        assert_eq!(request.timeout(), Some(Duration::from_secs(3)));
        Ok(())
    }

    #[test]
    fn test_request_follows_redirects_by_default() -> Result<(), Box<dyn Error>> {
        let request = Request::builder(Url::parse("http://localhost/")?).build();
        assert_eq!(request.method(), Method::GET);
        assert!(request.follow_redirects());
        assert_eq!(request.timeout(), None);
        assert!(request.body().is_empty());
        Ok(())
    }
}
