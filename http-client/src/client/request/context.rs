use super::{
    super::{
        request_call, ApiResult, Config, DefaultRetrier, Hooks, ResponseError, ResponseErrorKind, RetriedStatsInfo,
        Retrier, RetryConfig,
    },
    url_builder::build_url,
    Operation,
};
use reqflow_http::{Extensions, HeaderMap, Method, Response as HttpResponse, Url};

/// 请求上下文
///
/// 一次 API 调用的全部可变状态，在所有阶段之间以可变引用的方式传递。
/// 创建时复制传入的钩子集合，之后对原钩子集合的修改不会影响该请求。
#[derive(Debug)]
pub struct Request {
    config: Config,
    operation: Operation,
    hooks: Hooks,
    retrier: Box<dyn Retrier>,
    retry_config: Option<RetryConfig>,
    retried: RetriedStatsInfo,
    method: Method,
    url: Option<Url>,
    headers: HeaderMap,
    body: Vec<u8>,
    response: Option<HttpResponse>,
    error: Option<ResponseError>,
    request_id: Option<String>,
    extensions: Extensions,
}

impl Request {
    /// 创建请求上下文
    ///
    /// 根据配置和操作计算请求 URL 和 HTTP 方法，未传入重试器时使用 [`DefaultRetrier`]。
    /// 终端地址无法解析时，错误会被记录在请求上下文中，发送时直接进入 Complete 阶段。
    pub fn new(config: Config, operation: Operation, hooks: Hooks, retrier: Option<Box<dyn Retrier>>) -> Self {
        let (url, error) = match build_url(config.endpoint(), config.disable_ssl(), operation.path()) {
            Ok(url) => (url, None),
            Err(err) => (None, Some(ResponseError::new(ResponseErrorKind::InvalidEndpoint, err))),
        };
        Self {
            method: operation.effective_method(),
            retrier: retrier.unwrap_or_else(|| Box::<DefaultRetrier>::default()),
            hooks,
            retry_config: None,
            retried: Default::default(),
            headers: Default::default(),
            body: Default::default(),
            response: None,
            request_id: None,
            extensions: Default::default(),
            config,
            operation,
            url,
            error,
        }
    }

    /// 设置重试配置
    #[inline]
    #[must_use]
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    /// 发送请求
    ///
    /// 依次执行各个阶段的钩子，直到请求成功或不再可以重试，返回最终记录的错误。
    /// 可以重复调用，每次调用前会清空上次的响应，错误和重试统计信息，但终端地址解析错误会被保留。
    #[inline]
    pub fn send(&mut self) -> ApiResult<()> {
        request_call(self)
    }

    /// 获取客户端配置
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 获取 API 操作
    #[inline]
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// 获取钩子集合
    #[inline]
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// 获取钩子集合的可变引用
    #[inline]
    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    /// 获取重试器
    #[inline]
    pub fn retrier(&self) -> &dyn Retrier {
        self.retrier.as_ref()
    }

    /// 设置重试器
    #[inline]
    pub fn set_retrier(&mut self, retrier: Box<dyn Retrier>) {
        self.retrier = retrier;
    }

    /// 获取重试配置
    #[inline]
    pub fn retry_config(&self) -> Option<&RetryConfig> {
        self.retry_config.as_ref()
    }

    /// 设置重试配置
    #[inline]
    pub fn set_retry_config(&mut self, retry_config: RetryConfig) {
        self.retry_config = Some(retry_config);
    }

    /// 获取重试统计信息
    #[inline]
    pub fn retried(&self) -> &RetriedStatsInfo {
        &self.retried
    }

    /// 获取重试统计信息的可变引用
    #[inline]
    pub fn retried_mut(&mut self) -> &mut RetriedStatsInfo {
        &mut self.retried
    }

    /// 获取 HTTP 方法
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// 获取 HTTP 方法的可变引用
    #[inline]
    pub fn method_mut(&mut self) -> &mut Method {
        &mut self.method
    }

    /// 获取请求 URL
    ///
    /// 终端地址为空或无法解析时返回 `None`
    #[inline]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// 获取请求 URL 的可变引用
    #[inline]
    pub fn url_mut(&mut self) -> &mut Option<Url> {
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

    /// 设置请求体
    #[inline]
    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = body.into();
    }

    /// 获取 HTTP 响应
    #[inline]
    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// 设置 HTTP 响应
    #[inline]
    pub fn set_response(&mut self, response: HttpResponse) {
        self.response = Some(response);
    }

    /// 取出 HTTP 响应
    #[inline]
    pub fn take_response(&mut self) -> Option<HttpResponse> {
        self.response.take()
    }

    /// 获取 HTTP 响应状态码
    ///
    /// 没有收到响应时返回 0
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.response
            .as_ref()
            .map_or(0, |response| response.status_code().as_u16())
    }

    /// 获取当前记录的错误
    #[inline]
    pub fn error(&self) -> Option<&ResponseError> {
        self.error.as_ref()
    }

    /// 记录错误
    ///
    /// 覆盖之前记录的错误
    #[inline]
    pub fn set_error(&mut self, error: ResponseError) {
        self.error = Some(error);
    }

    /// 取出当前记录的错误
    #[inline]
    pub fn take_error(&mut self) -> Option<ResponseError> {
        self.error.take()
    }

    /// 获取请求 ID
    #[inline]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// 设置请求 ID
    #[inline]
    pub fn set_request_id(&mut self, request_id: impl Into<String>) {
        self.request_id = Some(request_id.into());
    }

    /// 获取扩展信息
    #[inline]
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// 获取扩展信息的可变引用
    #[inline]
    pub fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    /// 获取解析后的响应数据
    #[inline]
    pub fn data<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.extensions.get::<T>()
    }

    /// 取出解析后的响应数据
    #[inline]
    pub fn take_data<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.extensions.remove::<T>()
    }

    pub(in super::super) fn reset_attempt(&mut self) {
        self.response = None;
        self.error = None;
    }

    pub(in super::super) fn reset_for_send(&mut self) {
        self.retried.reset();
        self.response = None;
        if !matches!(self.error.as_ref().map(ResponseError::kind), Some(ResponseErrorKind::InvalidEndpoint)) {
            self.error = None;
        }
    }
}
