use anyhow::Error as AnyError;
use reqflow_http::{
    header::USER_AGENT, HeaderName, HeaderValue, HttpCaller, Request, Response, ResponseError, ResponseErrorKind,
    ResponseResult, StatusCode, Version, LIBRARY_USER_AGENT,
};
use std::{
    error::Error as StdError,
    fmt::Display,
    io::{Error as IoError, ErrorKind as IoErrorKind, Read},
    time::Duration,
};
use ureq::{
    Agent, AgentBuilder, Error as UreqError, ErrorKind as UreqErrorKind, Request as UreqRequest,
    Response as UreqResponse, Transport,
};

const DEFAULT_MAX_REDIRECTS: u32 = 5;

/// Ureq 客户端
///
/// 内部持有两个 Ureq Agent，分别用于跟随重定向和不跟随重定向的请求。
#[derive(Debug, Clone)]
pub struct Client {
    agent: Agent,
    no_redirect_agent: Agent,
}

impl Client {
    /// 创建 Ureq 客户端构建器
    #[inline]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    fn agent_for(&self, request: &Request) -> &Agent {
        if request.follow_redirects() {
            &self.agent
        } else {
            &self.no_redirect_agent
        }
    }
}

impl Default for Client {
    #[inline]
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

/// Ureq 客户端构建器
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    timeout: Option<Duration>,
    max_redirects: u32,
}

impl Default for ClientBuilder {
    #[inline]
    fn default() -> Self {
        Self {
            timeout: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl ClientBuilder {
    /// 设置默认的整体请求超时时长
    ///
    /// 请求自身设置的超时时长优先级更高
    #[inline]
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    /// 设置最大重定向次数
    #[inline]
    pub fn max_redirects(&mut self, max_redirects: u32) -> &mut Self {
        self.max_redirects = max_redirects;
        self
    }

    /// 构建 Ureq 客户端
    pub fn build(&self) -> Client {
        Client {
            agent: self.agent_builder().redirects(self.max_redirects).build(),
            no_redirect_agent: self.agent_builder().redirects(0).build(),
        }
    }

    fn agent_builder(&self) -> AgentBuilder {
        let mut builder = AgentBuilder::new();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}

impl HttpCaller for Client {
    fn call(&self, request: &Request) -> ResponseResult {
        let ureq_request = make_ureq_request(self.agent_for(request), request)?;
        match ureq_request.send_bytes(request.body()) {
            Ok(response) => make_response(response, request),
            Err(UreqError::Status(_, response)) => make_response(response, request),
            Err(UreqError::Transport(transport)) => Err(from_ureq_transport(transport, request)),
        }
    }
}

fn make_user_agent(request: &Request) -> Result<HeaderValue, ResponseError> {
    let base = match request.headers().get(USER_AGENT) {
        Some(user_agent) => user_agent
            .to_str()
            .map_err(|err| convert_header_value_error(request, user_agent, &err))?
            .to_owned(),
        None => LIBRARY_USER_AGENT.to_owned(),
    };
    let user_agent = format!("{}/reqflow-ureq", base);
    HeaderValue::from_str(&user_agent).map_err(|err| build_header_value_error(request, &user_agent, &err))
}

fn make_ureq_request(agent: &Agent, request: &Request) -> Result<UreqRequest, ResponseError> {
    let mut request_builder = agent.request(request.method().as_str(), request.url().as_str());
    for (header_name, header_value) in request.headers() {
        if *header_name == USER_AGENT {
            continue;
        }
        request_builder = set_header_for_request_builder(request_builder, request, header_name, header_value)?;
    }
    request_builder =
        set_header_for_request_builder(request_builder, request, &USER_AGENT, &make_user_agent(request)?)?;
    if let Some(timeout) = request.timeout() {
        request_builder = request_builder.timeout(timeout);
    }
    Ok(request_builder)
}

fn make_response(response: UreqResponse, request: &Request) -> ResponseResult {
    let mut response_builder = Response::builder();
    response_builder
        .status_code(status_code_of_response(&response, request)?)
        .version(parse_http_version(response.http_version(), request)?);
    let mut header_names = response.headers_names();
    header_names.sort_unstable();
    header_names.dedup();
    for header_name_str in header_names.into_iter() {
        for header_value_str in response.all(&header_name_str) {
            let header_name = HeaderName::from_bytes(header_name_str.as_bytes())
                .map_err(|err| build_header_name_error(request, &header_name_str, &err))?;
            let header_value = HeaderValue::from_bytes(header_value_str.as_bytes())
                .map_err(|err| build_header_value_error(request, header_value_str, &err))?;
            response_builder.header(header_name, header_value);
        }
    }
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|err| from_body_io_error(err, request))?;
    response_builder.body(body);
    Ok(response_builder.build())
}

fn from_body_io_error(err: IoError, request: &Request) -> ResponseError {
    let kind = if is_timeout_io_error_kind(err.kind()) {
        ResponseErrorKind::TimeoutError
    } else {
        ResponseErrorKind::ReceiveError
    };
    ResponseError::builder(kind, err).url(request.url()).build()
}

fn build_status_code_error(request: &Request, code: u16, err: &dyn Display) -> ResponseError {
    ResponseError::builder_with_msg(
        ResponseErrorKind::InvalidRequestResponse,
        format!("invalid status code({}): {}", code, err),
    )
    .url(request.url())
    .build()
}

fn build_header_name_error(request: &Request, header_name: &str, err: &dyn Display) -> ResponseError {
    ResponseError::builder_with_msg(
        ResponseErrorKind::InvalidHeader,
        format!("invalid header name({}): {}", header_name, err),
    )
    .url(request.url())
    .build()
}

fn build_header_value_error(request: &Request, header_value: &str, err: &dyn Display) -> ResponseError {
    ResponseError::builder_with_msg(
        ResponseErrorKind::InvalidHeader,
        format!("invalid header value({}): {}", header_value, err),
    )
    .url(request.url())
    .build()
}

fn convert_header_value_error(request: &Request, header_value: &HeaderValue, err: &dyn Display) -> ResponseError {
    ResponseError::builder_with_msg(
        ResponseErrorKind::InvalidHeader,
        format!("invalid header value({:?}): {}", header_value, err),
    )
    .url(request.url())
    .build()
}

fn set_header_for_request_builder(
    request_builder: UreqRequest,
    request: &Request,
    header_name: &HeaderName,
    header_value: &HeaderValue,
) -> Result<UreqRequest, ResponseError> {
    Ok(request_builder.set(
        header_name.as_str(),
        header_value
            .to_str()
            .map_err(|err| convert_header_value_error(request, header_value, &err))?,
    ))
}

fn status_code_of_response(response: &UreqResponse, request: &Request) -> Result<StatusCode, ResponseError> {
    StatusCode::from_u16(response.status()).map_err(|err| build_status_code_error(request, response.status(), &err))
}

fn parse_http_version(version: &str, request: &Request) -> Result<Version, ResponseError> {
    match version {
        "HTTP/0.9" => Ok(Version::HTTP_09),
        "HTTP/1.0" => Ok(Version::HTTP_10),
        "HTTP/1.1" => Ok(Version::HTTP_11),
        "HTTP/2.0" => Ok(Version::HTTP_2),
        "HTTP/3.0" => Ok(Version::HTTP_3),
        _ => Err(ResponseError::builder_with_msg(
            ResponseErrorKind::InvalidRequestResponse,
            format!("invalid http version: {}", version),
        )
        .url(request.url())
        .build()),
    }
}

#[inline]
fn is_timeout_io_error_kind(kind: IoErrorKind) -> bool {
    matches!(kind, IoErrorKind::TimedOut | IoErrorKind::WouldBlock)
}

fn io_error_kind_of(transport: &Transport) -> Option<IoErrorKind> {
    transport
        .source()
        .and_then(|err| err.downcast_ref::<IoError>())
        .map(IoError::kind)
}

fn from_ureq_transport(transport: Transport, request: &Request) -> ResponseError {
    let response_error_kind = if io_error_kind_of(&transport).map_or(false, is_timeout_io_error_kind) {
        ResponseErrorKind::TimeoutError
    } else {
        #[allow(unreachable_patterns)]
        match transport.kind() {
            UreqErrorKind::InvalidUrl => ResponseErrorKind::InvalidUrl,
            UreqErrorKind::UnknownScheme => ResponseErrorKind::InvalidUrl,
            UreqErrorKind::Dns => ResponseErrorKind::DnsServerError,
            UreqErrorKind::ConnectionFailed => ResponseErrorKind::ConnectError,
            UreqErrorKind::TooManyRedirects => ResponseErrorKind::TooManyRedirect,
            UreqErrorKind::BadStatus => ResponseErrorKind::InvalidRequestResponse,
            UreqErrorKind::BadHeader => ResponseErrorKind::InvalidHeader,
            UreqErrorKind::Io => ResponseErrorKind::SendError,
            UreqErrorKind::InvalidProxyUrl => ResponseErrorKind::ProxyError,
            UreqErrorKind::ProxyConnect => ResponseErrorKind::ProxyError,
            UreqErrorKind::ProxyUnauthorized => ResponseErrorKind::ProxyError,
            UreqErrorKind::HTTP => ResponseErrorKind::InvalidRequestResponse,
            UreqErrorKind::InsecureRequestHttpsOnly => ResponseErrorKind::SslError,
            _ => ResponseErrorKind::UnknownError,
        }
    };
    ResponseError::builder(response_error_kind, AnyError::new(transport))
        .url(request.url())
        .build()
}
