use std::borrow::Cow;
use thiserror::Error;
use url::{ParseError, Url};

/// URL 构建错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UrlBuildError {
    /// 终端地址无法解析
    #[error("invalid endpoint `{0}`: {1}")]
    InvalidEndpoint(String, #[source] ParseError),

    /// 终端地址中没有主机名
    #[error("endpoint `{0}` has no host")]
    MissingHost(String),
}

/// 为没有协议的终端地址添加协议
///
/// 已经带有协议的终端地址保持不变，否则根据 `disable_ssl` 添加 `http://` 或 `https://`。
pub fn add_scheme(endpoint: &str, disable_ssl: bool) -> Cow<'_, str> {
    if has_scheme(endpoint) {
        Cow::Borrowed(endpoint)
    } else if disable_ssl {
        Cow::Owned(format!("http://{}", endpoint))
    } else {
        Cow::Owned(format!("https://{}", endpoint))
    }
}

fn has_scheme(endpoint: &str) -> bool {
    let Some((scheme, _)) = endpoint.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().map_or(false, |c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// 合并终端地址与操作路径
///
/// 终端地址为空时返回 `None`。操作路径中的查询字符串非空时替换终端地址的查询字符串，否则保留终端地址的查询字符串。
pub(super) fn build_url(endpoint: &str, disable_ssl: bool, path: &str) -> Result<Option<Url>, UrlBuildError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Ok(None);
    }
    let endpoint = add_scheme(endpoint, disable_ssl);
    let mut url = Url::parse(&endpoint).map_err(|err| UrlBuildError::InvalidEndpoint(endpoint.to_string(), err))?;
    if url.cannot_be_a_base() || !url.has_host() {
        return Err(UrlBuildError::MissingHost(endpoint.into_owned()));
    }

    let (op_path, op_query) = path.split_once('?').unwrap_or((path, ""));
    let merged_path = join_path(url.path(), op_path).into_owned();
    url.set_path(&merged_path);
    if !op_query.is_empty() {
        url.set_query(Some(op_query));
    }
    Ok(Some(url))
}

fn join_path<'a>(base: &'a str, path: &'a str) -> Cow<'a, str> {
    if path.is_empty() {
        Cow::Borrowed(base)
    } else if base.is_empty() || base == "/" {
        if path.starts_with('/') {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("/{}", path))
        }
    } else {
        let base = base.strip_suffix('/').unwrap_or(base);
        let path = path.strip_prefix('/').unwrap_or(path);
        Cow::Owned(format!("{}/{}", base, path))
    }
}
