#![cfg_attr(feature = "docs", feature(doc_cfg))]
#![deny(
    single_use_lifetimes,
    missing_debug_implementations,
    anonymous_parameters,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    meta_variable_misuse,
    missing_docs,
    non_ascii_idents,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications
)]

//! # reqflow-ureq
//!
//! ## Ureq HTTP 客户端实现
//!
//! 基于 Ureq 库提供 [`reqflow_http::HttpCaller`] 接口实现，仅提供阻塞接口的实现。

mod client;

pub use client::{Client, ClientBuilder};

pub use reqflow_http as http;
pub use ureq;

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot::channel;
    use reqflow_http::{HttpCaller, Method, Request, ResponseErrorKind, StatusCode, Url};
    use std::{convert::Infallible, time::Duration};
    use tokio::{task::spawn_blocking, time::sleep};
    use warp::{
        filters::{body::bytes, method::post},
        header::value as header_value,
        http::{header::HeaderValue, Response as WarpResponse, StatusCode as WarpStatusCode},
        path,
        reply::with_status,
        Filter,
    };

    macro_rules! starts_with_server {
        ($addr:ident, $routes:ident, $code:block) => {{
            let (tx, rx) = channel();
            let ($addr, server) = warp::serve($routes).bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async move {
                rx.await.ok();
            });
            let handler = tokio::spawn(server);
            $code?;
            tx.send(()).ok();
            handler.await.ok();
        }};
    }

    #[tokio::test]
    async fn test_sync_call() -> anyhow::Result<()> {
        env_logger::builder().is_test(true).try_init().ok();

        let routes = path!("dir1" / "dir2" / "file")
            .and(post())
            .and(header_value("user-agent"))
            .and(bytes())
            .map(|user_agent: HeaderValue, req_body: warp::hyper::body::Bytes| {
                assert_eq!(req_body.as_ref(), b"hello reqflow");
                assert!(user_agent.to_str().unwrap().starts_with("reqflow-http/"));
                assert!(user_agent.to_str().unwrap().ends_with("/reqflow-ureq"));
                WarpResponse::builder()
                    .header("x-request-id", "fake_request_id")
                    .body("hello client")
                    .unwrap()
            })
            .or(path!("error").map(|| with_status("boom", WarpStatusCode::INTERNAL_SERVER_ERROR)));

        starts_with_server!(addr, routes, {
            spawn_blocking(move || {
                let client = Client::default();

                let request = Request::builder(Url::parse(&format!("http://{}/dir1/dir2/file", addr))?)
                    .method(Method::POST)
                    .body(b"hello reqflow".to_vec())
                    .build();
                let response = client.call(&request)?;
                assert_eq!(response.status_code(), StatusCode::OK);
                assert_eq!(
                    response.headers().get("x-request-id").map(|v| v.as_bytes()),
                    Some(b"fake_request_id".as_slice())
                );
                assert_eq!(response.body(), b"hello client");

                let request = Request::builder(Url::parse(&format!("http://{}/error", addr))?).build();
                let response = client.call(&request)?;
                assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(response.body(), b"boom");

                Ok::<_, anyhow::Error>(())
            })
            .await?
        });

        Ok(())
    }

    #[tokio::test]
    async fn test_redirect() -> anyhow::Result<()> {
        env_logger::builder().is_test(true).try_init().ok();

        let routes = path!("redirect")
            .map(|| {
                WarpResponse::builder()
                    .status(WarpStatusCode::TEMPORARY_REDIRECT)
                    .header("location", "/home")
                    .body(String::new())
                    .unwrap()
            })
            .or(path!("home").map(|| "ok"));

        starts_with_server!(addr, routes, {
            spawn_blocking(move || {
                let client = Client::default();
                let url = Url::parse(&format!("http://{}/redirect", addr))?;

                let response = client.call(&Request::builder(url.to_owned()).build())?;
                assert_eq!(response.status_code(), StatusCode::OK);
                assert_eq!(response.body(), b"ok");

                let response = client.call(&Request::builder(url).follow_redirects(false).build())?;
                assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);

                Ok::<_, anyhow::Error>(())
            })
            .await?
        });

        Ok(())
    }

    #[tokio::test]
    async fn test_timeout() -> anyhow::Result<()> {
        env_logger::builder().is_test(true).try_init().ok();

        let routes = path!("slow").and_then(|| async {
            sleep(Duration::from_millis(500)).await;
            Ok::<_, Infallible>("late")
        });

        starts_with_server!(addr, routes, {
            spawn_blocking(move || {
                let client = Client::builder().timeout(Duration::from_millis(100)).build();
                let request = Request::builder(Url::parse(&format!("http://{}/slow", addr))?).build();
                let err = client.call(&request).unwrap_err();
                assert_eq!(err.kind(), ResponseErrorKind::TimeoutError);
                assert!(err.is_temporary());
                Ok::<_, anyhow::Error>(())
            })
            .await?
        });

        Ok(())
    }
}
