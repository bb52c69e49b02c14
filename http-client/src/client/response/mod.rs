mod error;

pub use error::{Error as ResponseError, ErrorKind as ResponseErrorKind, Temporary};

/// API 调用结果
pub type ApiResult<T> = Result<T, ResponseError>;
