use http::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

/// 请求元信息转换错误
///
/// 元信息本身的读写操作不会失败，只有在转换为 HTTP 类型时才可能出错
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// 非法的 HTTP 头名称
    #[error("Invalid header name {name:?}: {source}")]
    InvalidHeaderName {
        /// HTTP 头名称
        name: String,
        /// 解析错误
        #[source]
        source: InvalidHeaderName,
    },

    /// 非法的 HTTP 头值
    #[error("Invalid value for header {name:?}: {source}")]
    InvalidHeaderValue {
        /// HTTP 头名称
        name: String,
        /// 解析错误
        #[source]
        source: InvalidHeaderValue,
    },
}

/// 请求元信息转换结果
pub type Result<T> = std::result::Result<T, Error>;
