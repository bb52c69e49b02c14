use reqflow_http::HttpCaller;
use std::{sync::Arc, time::Duration};

/// 客户端配置
///
/// 同一个客户端发出的所有请求共享该配置，单个请求不会修改它。
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: String,
    disable_ssl: bool,
    disable_follow_redirects: bool,
    timeout: Option<Duration>,
    http_caller: Option<Arc<dyn HttpCaller>>,
}

impl Config {
    /// 创建客户端配置构建器
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// 获取终端地址
    ///
    /// 可以是主机名，也可以是完整的 URL
    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 是否禁用 HTTPS
    #[inline]
    pub fn disable_ssl(&self) -> bool {
        self.disable_ssl
    }

    /// 是否禁止跟随重定向
    #[inline]
    pub fn disable_follow_redirects(&self) -> bool {
        self.disable_follow_redirects
    }

    /// 获取请求超时时长
    #[inline]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// 获取 HTTP 客户端
    #[inline]
    pub fn http_caller(&self) -> Option<&dyn HttpCaller> {
        self.http_caller.as_deref()
    }

    /// 合并另一份配置
    ///
    /// `other` 中非空的终端地址，已设置的超时时长和 HTTP 客户端会覆盖当前配置，布尔开关只会被打开。
    pub fn merge_in(&mut self, other: &Config) {
        if !other.endpoint.is_empty() {
            self.endpoint = other.endpoint.to_owned();
        }
        self.disable_ssl |= other.disable_ssl;
        self.disable_follow_redirects |= other.disable_follow_redirects;
        if let Some(timeout) = other.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(http_caller) = &other.http_caller {
            self.http_caller = Some(http_caller.to_owned());
        }
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            endpoint: Default::default(),
            disable_ssl: false,
            disable_follow_redirects: false,
            timeout: None,
            http_caller: default_http_caller(),
        }
    }
}

#[cfg(feature = "ureq")]
fn default_http_caller() -> Option<Arc<dyn HttpCaller>> {
    Some(Arc::new(reqflow_ureq::Client::default()))
}

#[cfg(not(feature = "ureq"))]
fn default_http_caller() -> Option<Arc<dyn HttpCaller>> {
    None
}

/// 客户端配置构建器
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    inner: Config,
}

impl ConfigBuilder {
    /// 设置终端地址
    #[inline]
    pub fn endpoint(&mut self, endpoint: impl Into<String>) -> &mut Self {
        self.inner.endpoint = endpoint.into();
        self
    }

    /// 设置是否禁用 HTTPS
    ///
    /// 仅对没有协议的终端地址生效
    #[inline]
    pub fn disable_ssl(&mut self, disable_ssl: bool) -> &mut Self {
        self.inner.disable_ssl = disable_ssl;
        self
    }

    /// 设置是否禁止跟随重定向
    #[inline]
    pub fn disable_follow_redirects(&mut self, disable_follow_redirects: bool) -> &mut Self {
        self.inner.disable_follow_redirects = disable_follow_redirects;
        self
    }

    /// 设置请求超时时长
    #[inline]
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.inner.timeout = Some(timeout);
        self
    }

    /// 设置 HTTP 客户端
    #[inline]
    pub fn http_caller(&mut self, http_caller: impl HttpCaller + 'static) -> &mut Self {
        self.inner.http_caller = Some(Arc::new(http_caller));
        self
    }

    /// 设置共享的 HTTP 客户端
    #[inline]
    pub fn shared_http_caller(&mut self, http_caller: Arc<dyn HttpCaller>) -> &mut Self {
        self.inner.http_caller = Some(http_caller);
        self
    }

    /// 构建客户端配置
    #[inline]
    pub fn build(&self) -> Config {
        self.inner.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(feature = "ureq", feature = "tls"))]
    use {
        super::super::{corehooks::default_hooks, Operation, Request, ResponseErrorKind},
        reqflow_http::ResponseErrorKind as HttpResponseErrorKind,
        std::{error::Error, net::TcpListener, result::Result},
    };

    #[test]
    fn test_merge_in() {
        let mut config = Config::builder().endpoint("example.com").build();
        let other = Config::builder()
            .disable_ssl(true)
            .timeout(Duration::from_secs(3))
            .build();
        config.merge_in(&other);
        assert_eq!(config.endpoint(), "example.com");
        assert!(config.disable_ssl());
        assert!(!config.disable_follow_redirects());
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));

        let other = Config::builder().endpoint("api.example.com").build();
        config.merge_in(&other);
        assert_eq!(config.endpoint(), "api.example.com");
        assert!(config.disable_ssl());
    }

    #[test]
    #[cfg(all(feature = "ureq", feature = "tls"))]
    fn test_default_http_caller_supports_https() -> Result<(), Box<dyn Error>> {
        env_logger::builder().is_test(true).try_init().ok();

        let addr = TcpListener::bind(("127.0.0.1", 0))?.local_addr()?;
        let config = Config::builder().endpoint(addr.to_string()).build();
        assert!(config.http_caller().is_some());

        let mut request = Request::new(config, Operation::default(), default_hooks(), None);
        let err = request.send().unwrap_err();
        assert!(matches!(err.kind(), ResponseErrorKind::HttpError(_)));
        assert_ne!(err.kind(), ResponseErrorKind::HttpError(HttpResponseErrorKind::InvalidUrl));
        Ok(())
    }
}
