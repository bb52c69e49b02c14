use super::super::{ApiResult, Phase, Request};
use log::{debug, info, warn};
use std::thread::sleep;

pub(in super::super) fn request_call(request: &mut Request) -> ApiResult<()> {
    request.reset_for_send();

    if request.error().is_none() {
        run_phase_until_error(request, Phase::Validate);
    }
    if request.error().is_none() {
        loop {
            run_phase_until_error(request, Phase::Build);
            if request.error().is_some() {
                break;
            }
            run_phase_until_error(request, Phase::Send);
            if request.error().is_none() {
                run_phase_until_error(request, Phase::Unmarshal);
                break;
            }
            if !request.retrier().retryable(request) {
                if let Some(err) = request.error() {
                    warn!(
                        "{}: give up after {} retries: {}",
                        request.operation().name(),
                        request.retried().retried_total(),
                        err
                    );
                }
                break;
            }
            run_phase(request, Phase::Retry);
            let delay = request.retrier().delay(request);
            if let Some(err) = request.error() {
                info!(
                    "{}: retry #{} in {:?}: {}",
                    request.operation().name(),
                    request.retried().retried_total(),
                    delay,
                    err
                );
            }
            sleep(delay);
            request.reset_attempt();
        }
    }
    run_phase(request, Phase::Complete);

    request.error().cloned().map_or(Ok(()), Err)
}

fn run_phase_until_error(request: &mut Request, phase: Phase) {
    debug!("{}: {}", request.operation().name(), phase);
    let chain = request.hooks().chain(phase).to_owned();
    chain.run_until_error(request);
}

fn run_phase(request: &mut Request, phase: Phase) {
    debug!("{}: {}", request.operation().name(), phase);
    let chain = request.hooks().chain(phase).to_owned();
    chain.run(request);
}

#[cfg(test)]
mod tests {
    use super::{
        super::super::{
            corehooks, Config, Hooks, Operation, ResponseError, ResponseErrorKind, RetryConfig,
        },
        *,
    };
    use crate::test_utils::{make_error_response_caller, make_fixed_response_caller};
    use reqflow_http::{HeaderMap, ResponseErrorKind as HttpResponseErrorKind, StatusCode};
    use std::{
        error::Error,
        result::Result,
        sync::{Arc, Mutex},
        time::Duration,
    };

    #[derive(Debug, Clone, Default)]
    struct Trace(Arc<Mutex<String>>);

    impl Trace {
        fn hooks(&self) -> Hooks {
            let mut hooks = Hooks::new();
            for phase in Phase::ALL {
                let trace = self.to_owned();
                hooks
                    .chain_mut(phase)
                    .push_back(move |_| trace.0.lock().unwrap().push_str(&format!("{}:", phase)));
            }
            hooks
        }

        fn get(&self) -> String {
            self.0.lock().unwrap().to_owned()
        }
    }

    fn temporary_error() -> ResponseError {
        ResponseError::new_with_msg(ResponseErrorKind::CallbackError, "fake error").mark_temporary(true)
    }

    fn make_request(hooks: Hooks) -> Request {
        Request::new(
            Config::builder().endpoint("example.com").build(),
            Operation::builder("FooBar").build(),
            hooks,
            None,
        )
    }

    #[test]
    fn test_hooks_order_on_success() -> Result<(), Box<dyn Error>> {
        env_logger::builder().is_test(true).try_init().ok();

        let trace = Trace::default();
        let mut request = make_request(trace.hooks());
        request.send()?;
        assert_eq!(trace.get(), "validate:build:send:unmarshal:complete:");
        Ok(())
    }

    #[test]
    fn test_hooks_order_on_error_without_retry_config() {
        env_logger::builder().is_test(true).try_init().ok();

        let trace = Trace::default();
        let mut hooks = trace.hooks();
        hooks.send_mut().push_back(|request| request.set_error(temporary_error()));
        let mut request = make_request(hooks);

        let err = request.send().unwrap_err();
        assert_eq!(err.kind(), ResponseErrorKind::CallbackError);
        assert_eq!(trace.get(), "validate:build:send:complete:");
        assert_eq!(request.retried().retried_total(), 0);
    }

    #[test]
    fn test_retry_once() {
        env_logger::builder().is_test(true).try_init().ok();

        let trace = Trace::default();
        let mut hooks = trace.hooks();
        hooks.send_mut().push_back(|request| request.set_error(temporary_error()));
        hooks
            .retry_mut()
            .push_back_hook(corehooks::increase_retry_count_hook());
        let mut request = make_request(hooks).with_retry_config(
            RetryConfig::builder()
                .max_retries(1)
                .initial_delay(Duration::from_millis(10))
                .jitter(0.1)
                .max_elapsed_time(Duration::from_secs(5))
                .build(),
        );

        assert!(request.send().is_err());
        assert_eq!(request.retried().retried_total(), 1);
        assert_eq!(trace.get(), "validate:build:send:retry:build:send:complete:");
    }

    #[test]
    fn test_retry_then_succeed() -> Result<(), Box<dyn Error>> {
        env_logger::builder().is_test(true).try_init().ok();

        let trace = Trace::default();
        let mut hooks = trace.hooks();
        hooks.send_mut().push_back(|request| {
            if request.retried().retried_total() < 2 {
                request.set_error(temporary_error());
            }
        });
        hooks
            .retry_mut()
            .push_back_hook(corehooks::increase_retry_count_hook());
        let mut request = make_request(hooks).with_retry_config(RetryConfig::new(
            3,
            Duration::from_millis(1),
            0.0,
            Duration::from_secs(5),
        ));

        request.send()?;
        assert_eq!(request.retried().retried_total(), 2);
        assert_eq!(
            trace.get(),
            "validate:build:send:retry:build:send:retry:build:send:unmarshal:complete:"
        );
        Ok(())
    }

    #[test]
    fn test_send_twice() -> Result<(), Box<dyn Error>> {
        let trace = Trace::default();
        let mut hooks = trace.hooks();
        hooks.send_mut().push_back(|request| {
            if request.extensions().get::<u8>().is_none() {
                request.extensions_mut().insert(1u8);
                request.set_error(temporary_error());
            }
        });
        let mut request = make_request(hooks);

        assert!(request.send().is_err());
        assert_eq!(trace.get(), "validate:build:send:complete:");

        request.send()?;
        assert!(request.error().is_none());
        assert_eq!(
            trace.get(),
            "validate:build:send:complete:validate:build:send:unmarshal:complete:"
        );

        let mut request = Request::new(
            Config::builder().endpoint("http://").build(),
            Operation::default(),
            Hooks::new(),
            None,
        );
        for _ in 0..2 {
            let err = request.send().unwrap_err();
            assert_eq!(err.kind(), ResponseErrorKind::InvalidEndpoint);
        }
        Ok(())
    }

    #[test]
    fn test_validate_error_skips_to_complete() {
        let trace = Trace::default();
        let mut hooks = trace.hooks();
        hooks.validate_mut().push_front(|request| {
            request.set_error(ResponseError::new_with_msg(ResponseErrorKind::ValidationError, "invalid"))
        });
        let mut request = make_request(hooks);

        let err = request.send().unwrap_err();
        assert_eq!(err.kind(), ResponseErrorKind::ValidationError);
        assert_eq!(trace.get(), "complete:");
    }

    #[test]
    fn test_build_error_is_not_retried() {
        let trace = Trace::default();
        let mut hooks = trace.hooks();
        hooks.build_mut().push_front(|request| {
            request.set_error(ResponseError::new_with_msg(ResponseErrorKind::BuildError, "bad").mark_temporary(true))
        });
        let mut request = make_request(hooks).with_retry_config(RetryConfig::new(
            3,
            Duration::from_millis(1),
            0.0,
            Duration::from_secs(5),
        ));

        let err = request.send().unwrap_err();
        assert_eq!(err.kind(), ResponseErrorKind::BuildError);
        assert_eq!(trace.get(), "validate:complete:");
    }

    #[test]
    fn test_invalid_endpoint_skips_to_complete() {
        let trace = Trace::default();
        let mut request = Request::new(
            Config::builder().endpoint("http://").build(),
            Operation::default(),
            trace.hooks(),
            None,
        );
        let err = request.send().unwrap_err();
        assert_eq!(err.kind(), ResponseErrorKind::InvalidEndpoint);
        assert_eq!(trace.get(), "complete:");
    }

    #[test]
    fn test_send_with_core_hooks() -> Result<(), Box<dyn Error>> {
        env_logger::builder().is_test(true).try_init().ok();

        let config = Config::builder()
            .endpoint("example.com")
            .http_caller(make_fixed_response_caller(
                StatusCode::OK,
                HeaderMap::new(),
                b"{\"id\":10}".to_vec(),
            ))
            .build();
        let mut hooks = corehooks::default_hooks();
        hooks
            .unmarshal_mut()
            .push_back_hook(corehooks::decode_json_hook::<serde_json::Value>());
        let mut request = Request::new(config, Operation::builder("GetPost").build(), hooks, None);

        request.send()?;
        assert_eq!(request.status_code(), 200);
        assert_eq!(
            request.data::<serde_json::Value>(),
            Some(&serde_json::json!({ "id": 10 }))
        );
        assert!(request.request_id().is_some());
        Ok(())
    }

    #[test]
    fn test_retry_transport_errors_with_core_hooks() {
        env_logger::builder().is_test(true).try_init().ok();

        let config = Config::builder()
            .endpoint("example.com")
            .http_caller(make_error_response_caller(
                HttpResponseErrorKind::ConnectError,
                "connection refused",
            ))
            .build();
        let mut request = Request::new(config, Operation::default(), corehooks::default_hooks(), None).with_retry_config(
            RetryConfig::new(2, Duration::from_millis(1), 0.0, Duration::from_secs(5)),
        );

        let err = request.send().unwrap_err();
        assert_eq!(
            err.kind(),
            ResponseErrorKind::HttpError(HttpResponseErrorKind::ConnectError)
        );
        assert_eq!(request.retried().retried_total(), 2);
        assert_eq!(request.status_code(), 0);
    }
}
