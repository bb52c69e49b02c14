use anyhow::Error as AnyError;
use assert_impl::assert_impl;
use reqflow_http::{
    Response as HttpResponse, ResponseError as HttpResponseError, ResponseErrorKind as HttpResponseErrorKind,
    StatusCode,
};
use std::{
    error::Error as StdError,
    fmt::{self, Debug, Display},
    sync::Arc,
};

const RESPONSE_BODY_SAMPLE_LEN_LIMIT: usize = 1024;

/// 临时性错误判断
///
/// 重试策略仅通过该接口判断错误是否可以重试。
pub trait Temporary {
    /// 是否为临时性错误
    ///
    /// 返回 `None` 表示该错误无法判断是否为临时性错误。
    fn temporary(&self) -> Option<bool>;
}

/// 请求错误类型
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// HTTP 客户端错误
    HttpError(HttpResponseErrorKind),

    /// 响应状态码错误
    StatusCodeError(StatusCode),

    /// 非法的终端地址
    InvalidEndpoint,

    /// 请求校验错误
    ValidationError,

    /// 请求构建错误
    BuildError,

    /// 解析响应体错误
    ParseResponseError,

    /// 钩子函数错误
    CallbackError,
}

/// 请求错误
///
/// 请求上下文中仅保存一个该错误，后执行的阶段写入的错误会覆盖之前的错误。
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    error: Arc<AnyError>,
    status_code: Option<StatusCode>,
    response_body_sample: Vec<u8>,
    temporary: Option<bool>,
}

impl Error {
    /// 创建请求错误
    #[inline]
    pub fn new(kind: ErrorKind, err: impl Into<AnyError>) -> Self {
        Self {
            kind,
            error: Arc::new(err.into()),
            status_code: None,
            response_body_sample: Default::default(),
            temporary: None,
        }
    }

    /// 创建请求错误
    #[inline]
    pub fn new_with_msg(kind: ErrorKind, msg: impl Display + Debug + Send + Sync + 'static) -> Self {
        Self::new(kind, AnyError::msg(msg))
    }

    /// 从 HTTP 客户端错误创建请求错误
    #[inline]
    pub fn from_http_response_error(err: HttpResponseError) -> Self {
        Self::new(ErrorKind::HttpError(err.kind()), err)
    }

    /// 从状态码异常的 HTTP 响应创建请求错误
    pub fn from_unexpected_response(response: &HttpResponse) -> Self {
        let status_code = response.status_code();
        Self::new_with_msg(
            ErrorKind::StatusCodeError(status_code),
            format!("unexpected status code: {}", status_code),
        )
        .status_code(status_code)
        .response_body_sample(response.body())
    }

    /// 设置 HTTP 响应状态码
    #[inline]
    #[must_use]
    pub fn status_code(mut self, status_code: StatusCode) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// 设置响应体样本
    ///
    /// 仅保留前 1 KiB 数据
    #[inline]
    #[must_use]
    pub fn response_body_sample(mut self, body: &[u8]) -> Self {
        self.response_body_sample = body[..body.len().min(RESPONSE_BODY_SAMPLE_LEN_LIMIT)].to_vec();
        self
    }

    /// 明确设置是否为临时性错误
    #[inline]
    #[must_use]
    pub fn mark_temporary(mut self, temporary: bool) -> Self {
        self.temporary = Some(temporary);
        self
    }

    /// 获取请求错误类型
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 获取 HTTP 响应状态码
    ///
    /// 没有收到响应时返回 0
    #[inline]
    pub fn status(&self) -> u16 {
        self.status_code.map_or(0, |status_code| status_code.as_u16())
    }

    /// 获取响应体样本
    #[inline]
    pub fn body_sample(&self) -> &[u8] {
        &self.response_body_sample
    }

    /// 是否为超时错误
    ///
    /// 状态码为 504 或 HTTP 客户端报告超时
    pub fn timeout(&self) -> bool {
        self.status_code == Some(StatusCode::GATEWAY_TIMEOUT)
            || matches!(self.kind, ErrorKind::HttpError(kind) if kind.is_timeout())
    }

    /// 获取内部错误
    #[inline]
    pub fn inner(&self) -> &AnyError {
        &self.error
    }

    #[allow(dead_code)]
    fn assert() {
        assert_impl!(Send: Self);
        assert_impl!(Sync: Self);
    }
}

impl Temporary for Error {
    fn temporary(&self) -> Option<bool> {
        if let Some(temporary) = self.temporary {
            return Some(temporary);
        }
        match self.kind {
            ErrorKind::HttpError(kind) => Some(kind.is_temporary() || self.timeout()),
            ErrorKind::StatusCodeError(status_code) => Some(
                self.timeout()
                    || matches!(
                        status_code,
                        StatusCode::TOO_MANY_REQUESTS | StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE
                    ),
            ),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}]", self.kind)?;
        if let Some(status_code) = self.status_code {
            write!(f, "[{}]", status_code.as_u16())?;
        }
        write!(f, " {}", self.error)?;
        if !self.response_body_sample.is_empty() {
            write!(f, " [{}]", String::from_utf8_lossy(&self.response_body_sample))?;
        }
        Ok(())
    }
}

impl StdError for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let source: &(dyn StdError + 'static) = &**self.error;
        Some(source)
    }
}

impl From<HttpResponseError> for Error {
    #[inline]
    fn from(err: HttpResponseError) -> Self {
        Self::from_http_response_error(err)
    }
}
