use reqflow_http::{
    HeaderMap, HttpCaller, Method, Request as HttpRequest, Response as HttpResponse, ResponseError,
    ResponseErrorKind, ResponseResult, StatusCode, Url,
};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

pub(crate) fn make_dumb_caller() -> impl HttpCaller {
    #[derive(Debug, Default)]
    struct FakeHttpCaller;

    impl HttpCaller for FakeHttpCaller {
        #[inline]
        fn call(&self, _request: &HttpRequest) -> ResponseResult {
            Ok(Default::default())
        }
    }

    FakeHttpCaller
}

pub(crate) fn make_fixed_response_caller(status_code: StatusCode, headers: HeaderMap, body: Vec<u8>) -> impl HttpCaller {
    #[derive(Debug)]
    struct FixedResponseHttpCaller {
        status_code: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    }

    impl HttpCaller for FixedResponseHttpCaller {
        #[inline]
        fn call(&self, _request: &HttpRequest) -> ResponseResult {
            Ok(HttpResponse::builder()
                .status_code(self.status_code)
                .headers(self.headers.to_owned())
                .body(self.body.to_owned())
                .build())
        }
    }

    FixedResponseHttpCaller {
        status_code,
        headers,
        body,
    }
}

pub(crate) fn make_error_response_caller(error_kind: ResponseErrorKind, message: &'static str) -> impl HttpCaller {
    #[derive(Debug)]
    struct ErrorHttpCaller {
        error_kind: ResponseErrorKind,
        message: &'static str,
    }

    impl HttpCaller for ErrorHttpCaller {
        #[inline]
        fn call(&self, request: &HttpRequest) -> ResponseResult {
            Err(ResponseError::builder_with_msg(self.error_kind, self.message)
                .url(request.url())
                .build())
        }
    }

    ErrorHttpCaller { error_kind, message }
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Vec<u8>,
    pub(crate) follow_redirects: bool,
    pub(crate) timeout: Option<Duration>,
}

pub(crate) fn make_recording_caller() -> (impl HttpCaller, Arc<Mutex<Vec<RecordedRequest>>>) {
    #[derive(Debug, Default)]
    struct RecordingHttpCaller {
        recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl HttpCaller for RecordingHttpCaller {
        fn call(&self, request: &HttpRequest) -> ResponseResult {
            self.recorded.lock().unwrap().push(RecordedRequest {
                method: request.method().to_owned(),
                url: request.url().to_owned(),
                headers: request.headers().to_owned(),
                body: request.body().to_owned(),
                follow_redirects: request.follow_redirects(),
                timeout: request.timeout(),
            });
            Ok(Default::default())
        }
    }

    let caller = RecordingHttpCaller::default();
    let recorded = caller.recorded.to_owned();
    (caller, recorded)
}
