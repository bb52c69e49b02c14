mod context;
mod url_builder;

pub use context::Request;
pub use url_builder::{add_scheme, UrlBuildError};

use reqflow_http::Method;
use std::borrow::Cow;

/// API 操作
///
/// 描述一次调用的名称，HTTP 方法和路径，路径中可以包含查询字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operation {
    name: Cow<'static, str>,
    method: Option<Method>,
    path: Cow<'static, str>,
}

impl Operation {
    /// 创建 API 操作构建器
    #[inline]
    pub fn builder(name: impl Into<Cow<'static, str>>) -> OperationBuilder {
        OperationBuilder::new(name)
    }

    /// 获取操作名称
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取 HTTP 方法
    #[inline]
    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    /// 获取实际使用的 HTTP 方法
    ///
    /// 未设置 HTTP 方法时使用 POST
    #[inline]
    pub fn effective_method(&self) -> Method {
        self.method.to_owned().unwrap_or(Method::POST)
    }

    /// 获取路径
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// API 操作构建器
#[derive(Debug, Clone)]
pub struct OperationBuilder {
    inner: Operation,
}

impl OperationBuilder {
    /// 创建 API 操作构建器
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: Operation {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// 设置 HTTP 方法
    #[inline]
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.inner.method = Some(method);
        self
    }

    /// 设置路径
    #[inline]
    #[must_use]
    pub fn path(mut self, path: impl Into<Cow<'static, str>>) -> Self {
        self.inner.path = path.into();
        self
    }

    /// 构建 API 操作
    #[inline]
    pub fn build(self) -> Operation {
        self.inner
    }
}
