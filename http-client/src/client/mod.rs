mod call;
mod client;
mod config;
pub mod corehooks;
mod hooks;
mod request;
mod response;
mod retried;
mod retrier;

pub use client::{Client, ClientBuilder};
pub use config::{Config, ConfigBuilder};
pub use hooks::{Hook, HookChain, HookFn, Hooks, Phase};
pub use request::{Operation, OperationBuilder, Request, UrlBuildError};
pub use response::{ApiResult, ResponseError, ResponseErrorKind, Temporary};
pub use retried::RetriedStatsInfo;
pub use retrier::{DefaultRetrier, NeverRetrier, Retrier, RetryConfig, RetryConfigBuilder};

use call::request_call;
