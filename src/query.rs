//! 查询字符串的编码与生成

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::{self, Write};
use url::Url;

/// 查询参数编码集
///
/// 除字母、数字和 `-_.~` 以外的字符均会被百分号编码
pub const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// 对查询参数的键或值进行百分号编码
#[inline]
pub fn encode_query_component(component: &str) -> String {
    utf8_percent_encode(component, QUERY_ENCODE_SET).to_string()
}

pub(super) fn write_query_pairs<'a, W: Write>(
    w: &mut W,
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> fmt::Result {
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            w.write_char('&')?;
        }
        write!(
            w,
            "{}={}",
            utf8_percent_encode(key, QUERY_ENCODE_SET),
            utf8_percent_encode(value, QUERY_ENCODE_SET)
        )?;
    }
    Ok(())
}

pub(super) fn join_query_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut query = String::new();
    // 写入 String 不会失败
    write_query_pairs(&mut query, pairs).ok();
    query
}

pub(super) fn append_query(url: &mut Url, query: &str) {
    if query.is_empty() {
        return;
    }
    let mut segments: Vec<&str> = url
        .query()
        .map(|existing| existing.split('&').filter(|segment| !segment.is_empty()).collect())
        .unwrap_or_default();
    segments.push(query);
    let merged = segments.join("&");
    debug!("Apply query {:?} to {}", query, url.path());
    url.set_query(Some(&merged));
}
