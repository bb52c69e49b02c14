use super::{corehooks::default_hooks, Config, DefaultRetrier, Hooks, Operation, Request, Retrier, RetryConfig};

/// API 客户端
///
/// 保存客户端配置，钩子集合原型，重试器原型和重试配置，每次创建请求时复制一份给请求上下文，
/// 因此对单个请求的修改不会影响之后创建的请求。
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    hooks: Hooks,
    retrier: Box<dyn Retrier>,
    retry_config: Option<RetryConfig>,
}

impl Client {
    /// 创建 API 客户端构建器
    #[inline]
    pub fn builder(config: Config) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    /// 获取客户端配置
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 获取钩子集合原型
    #[inline]
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// 获取钩子集合原型的可变引用
    #[inline]
    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    /// 获取重试配置
    #[inline]
    pub fn retry_config(&self) -> Option<&RetryConfig> {
        self.retry_config.as_ref()
    }

    /// 创建请求上下文
    #[inline]
    pub fn new_request(&self, operation: Operation) -> Request {
        self.new_request_with_hooks(operation, self.hooks.copy())
    }

    /// 使用指定的钩子集合创建请求上下文
    pub fn new_request_with_hooks(&self, operation: Operation, hooks: Hooks) -> Request {
        let mut request = Request::new(self.config.to_owned(), operation, hooks, Some(self.retrier.to_owned()));
        if let Some(retry_config) = self.retry_config {
            request.set_retry_config(retry_config);
        }
        request
    }
}

impl Default for Client {
    #[inline]
    fn default() -> Self {
        ClientBuilder::new(Default::default()).build()
    }
}

/// API 客户端构建器
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    inner: Client,
}

impl ClientBuilder {
    /// 创建 API 客户端构建器
    ///
    /// 默认使用 [`default_hooks`] 提供的钩子集合和 [`DefaultRetrier`]，不重试。
    #[inline]
    pub fn new(config: Config) -> Self {
        Self {
            inner: Client {
                config,
                hooks: default_hooks(),
                retrier: Box::new(DefaultRetrier),
                retry_config: None,
            },
        }
    }

    /// 设置钩子集合原型
    #[inline]
    pub fn hooks(&mut self, hooks: Hooks) -> &mut Self {
        self.inner.hooks = hooks;
        self
    }

    /// 设置重试器原型
    #[inline]
    pub fn retrier(&mut self, retrier: impl Retrier + 'static) -> &mut Self {
        self.inner.retrier = Box::new(retrier);
        self
    }

    /// 设置重试配置
    #[inline]
    pub fn retry_config(&mut self, retry_config: RetryConfig) -> &mut Self {
        self.inner.retry_config = Some(retry_config);
        self
    }

    /// 构建 API 客户端
    #[inline]
    pub fn build(&self) -> Client {
        self.inner.to_owned()
    }
}
