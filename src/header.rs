//! Riak HTTP 头

use super::error::{Error, Result};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use log::debug;

/// Riak 客户端 ID HTTP 头
pub const CLIENT_ID: &str = "X-Riak-ClientId";

/// Accept HTTP 头
pub const ACCEPT: &str = "Accept";

/// Content-Type HTTP 头
pub const CONTENT_TYPE: &str = "Content-Type";

pub(super) fn to_header_map<'a>(headers: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<HeaderMap> {
    let mut header_map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| Error::InvalidHeaderName {
            name: name.to_owned(),
            source: err,
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|err| Error::InvalidHeaderValue {
            name: name.to_owned(),
            source: err,
        })?;
        if header_map.insert(header_name, header_value).is_some() {
            debug!("Header {:?} collapses with an earlier one differing by case", name);
        }
    }
    debug!("Built {} headers", header_map.len());
    Ok(header_map)
}
