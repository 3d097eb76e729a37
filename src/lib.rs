#![deny(
    anonymous_parameters,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    missing_docs,
    trivial_numeric_casts,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]

//! # riak-request-meta
//!
//! Riak HTTP 客户端请求元信息
//!
//! 为即将发出的 HTTP 请求收集查询参数与 HTTP 头，并提供读、写、删除操作常用的 quorum 参数构造方法。
//! 实际的 HTTP 传输由调用方负责，本库只负责生成查询字符串和 HTTP 头列表。

mod error;
pub mod header;
mod meta;
pub mod query;
pub mod quorum;

pub use error::{Error, Result};
pub use meta::RequestMeta;
pub use quorum::Quorums;

pub use http;
pub use indexmap::IndexMap;
pub use url;
