use anyhow::Error as AnyError;
use assert_impl::assert_impl;
use std::{
    error::Error as StdError,
    fmt::{self, Debug, Display},
};
use url::Url;

/// HTTP 响应错误类型
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 非法的 URL
    InvalidUrl,

    /// 非法的 HTTP 头
    InvalidHeader,

    /// 非法的请求 / 响应错误
    InvalidRequestResponse,

    /// 网络连接失败
    ConnectError,

    /// 代理连接失败
    ProxyError,

    /// DNS 服务器连接失败
    DnsServerError,

    /// 发送失败
    SendError,

    /// 接受失败
    ReceiveError,

    /// 本地 IO 失败
    LocalIoError,

    /// 超时失败
    TimeoutError,

    /// SSL 错误
    SslError,

    /// 重定向次数过多
    TooManyRedirect,

    /// 回调函数返回错误
    CallbackError,

    /// 未知错误
    UnknownError,
}

impl ErrorKind {
    /// 是否为超时错误
    #[inline]
    pub fn is_timeout(self) -> bool {
        self == Self::TimeoutError
    }

    /// 是否为临时性错误
    ///
    /// 临时性错误意味着相同的请求再次发送时有可能成功。
    pub fn is_temporary(self) -> bool {
        matches!(
            self,
            Self::ConnectError
                | Self::ProxyError
                | Self::DnsServerError
                | Self::SendError
                | Self::ReceiveError
                | Self::TimeoutError
        )
    }
}

/// HTTP 响应错误
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    error: AnyError,
    url: Option<Url>,
}

impl Error {
    /// 创建 HTTP 响应错误构建器
    #[inline]
    pub fn builder(kind: ErrorKind, err: impl Into<AnyError>) -> ErrorBuilder {
        ErrorBuilder::new(kind, err)
    }

    /// 创建 HTTP 响应错误构建器
    #[inline]
    pub fn builder_with_msg(kind: ErrorKind, msg: impl Display + Debug + Send + Sync + 'static) -> ErrorBuilder {
        ErrorBuilder::new(kind, AnyError::msg(msg))
    }

    /// 获取 HTTP 响应错误类型
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 获取出错的请求 URL
    #[inline]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// 是否为超时错误
    #[inline]
    pub fn is_timeout(&self) -> bool {
        self.kind.is_timeout()
    }

    /// 是否为临时性错误
    #[inline]
    pub fn is_temporary(&self) -> bool {
        self.kind.is_temporary()
    }

    /// 转换为内部错误
    #[inline]
    pub fn into_inner(self) -> AnyError {
        self.error
    }

    #[allow(dead_code)]
    fn assert() {
        assert_impl!(Send: Self);
        assert_impl!(Sync: Self);
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:?}]", self.kind)?;
        if let Some(url) = self.url.as_ref() {
            write!(f, "[{}]", url)?;
        }
        write!(f, " {}", self.error)
    }
}

impl StdError for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.error.as_ref())
    }
}

/// HTTP 响应错误构建器
#[derive(Debug)]
pub struct ErrorBuilder {
    inner: Error,
}

impl ErrorBuilder {
    #[inline]
    fn new(kind: ErrorKind, err: impl Into<AnyError>) -> Self {
        Self {
            inner: Error {
                kind,
                error: err.into(),
                url: None,
            },
        }
    }

    /// 设置出错的请求 URL
    #[inline]
    #[must_use]
    pub fn url(mut self, url: &Url) -> Self {
        self.inner.url = Some(url.to_owned());
        self
    }

    /// 构建 HTTP 响应错误
    #[inline]
    pub fn build(self) -> Error {
        self.inner
    }
}
