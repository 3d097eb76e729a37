use super::{
    error::Result,
    header::{self, ACCEPT, CLIENT_ID, CONTENT_TYPE},
    query,
    quorum::{DW, R, RW, W},
};
use http::HeaderMap;
use indexmap::IndexMap;
use log::debug;
use std::fmt::{self, Display};
use url::Url;

/// HTTP 请求元信息
///
/// 保存一次 Riak HTTP 请求附带的查询参数和 HTTP 头。
/// 查询参数与 HTTP 头均按照插入顺序保存，同名的键只会出现一次，后设置的值覆盖先前的值。
/// 查询参数仅在生成查询字符串时才会进行百分号编码，存取的始终是原始值。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestMeta {
    query_params: IndexMap<String, String>,
    headers: IndexMap<String, String>,
}

impl RequestMeta {
    /// 创建空的请求元信息
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// 创建读操作请求元信息
    ///
    /// 如果 `r` 为 `None`，则不会设置 `r` 查询参数
    pub fn read_params(r: Option<i32>) -> Self {
        let mut meta = Self::new();
        meta.set_optional_query_param(R, r.map(|r| r.to_string()));
        debug!("Built read params: {:?}", meta.query_params());
        meta
    }

    /// 创建写操作请求元信息
    ///
    /// `w` 与 `dw` 相互独立，为 `None` 的参数不会被设置
    pub fn write_params(w: Option<i32>, dw: Option<i32>) -> Self {
        let mut meta = Self::new();
        meta.set_optional_query_param(W, w.map(|w| w.to_string()))
            .set_optional_query_param(DW, dw.map(|dw| dw.to_string()));
        debug!("Built write params: {:?}", meta.query_params());
        meta
    }

    /// 创建删除操作请求元信息
    ///
    /// 如果 `rw` 为 `None`，则不会设置 `rw` 查询参数
    pub fn delete_params(rw: Option<i32>) -> Self {
        let mut meta = Self::new();
        meta.set_optional_query_param(RW, rw.map(|rw| rw.to_string()));
        debug!("Built delete params: {:?}", meta.query_params());
        meta
    }

    /// 设置查询参数
    pub fn set_query_param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key: String = key.into();
        let value: String = value.into();
        if let Some(old_value) = self.query_params.get(&key) {
            debug!("Query param {:?} is overwritten: {:?} -> {:?}", key, old_value, value);
        }
        self.query_params.insert(key, value);
        self
    }

    /// 设置可选的查询参数
    ///
    /// 值为 `None` 时将移除已有的同名查询参数
    pub fn set_optional_query_param(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> &mut Self {
        match value {
            Some(value) => self.set_query_param(key, value),
            None => {
                let key: String = key.into();
                self.remove_query_param(&key);
                self
            }
        }
    }

    /// 移除查询参数，返回被移除的值
    #[inline]
    pub fn remove_query_param(&mut self, key: &str) -> Option<String> {
        self.query_params.shift_remove(key)
    }

    /// 获取查询参数的原始值
    #[inline]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_params.get(key).map(String::as_str)
    }

    /// 是否设置了查询参数
    #[inline]
    pub fn has_query_param(&self, key: &str) -> bool {
        self.query_params.contains_key(key)
    }

    /// 按照插入顺序遍历查询参数的原始键值对
    #[inline]
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query_params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// 生成查询字符串
    ///
    /// 形如 `key1=value1&key2=value2`，按照插入顺序排列，键和值均经过百分号编码。
    /// 没有查询参数时返回空字符串。
    #[inline]
    pub fn query_params(&self) -> String {
        query::join_query_pairs(self.query_pairs())
    }

    /// 设置 HTTP 头
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key: String = key.into();
        let value: String = value.into();
        if let Some(old_value) = self.headers.get(&key) {
            debug!("Header {:?} is overwritten: {:?} -> {:?}", key, old_value, value);
        }
        self.headers.insert(key, value);
        self
    }

    /// 设置可选的 HTTP 头
    ///
    /// 值为 `None` 时将移除已有的同名 HTTP 头
    pub fn set_optional_header(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> &mut Self {
        match value {
            Some(value) => self.set_header(key, value),
            None => {
                let key: String = key.into();
                self.remove_header(&key);
                self
            }
        }
    }

    /// 移除 HTTP 头，返回被移除的值
    #[inline]
    pub fn remove_header(&mut self, key: &str) -> Option<String> {
        self.headers.shift_remove(key)
    }

    /// 获取 HTTP 头
    #[inline]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// 是否设置了 HTTP 头
    #[inline]
    pub fn has_header(&self, key: &str) -> bool {
        self.headers.contains_key(key)
    }

    /// 获取全部 HTTP 头
    #[inline]
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// 设置 Riak 客户端 ID
    #[inline]
    pub fn set_client_id(&mut self, client_id: impl Into<String>) -> &mut Self {
        self.set_header(CLIENT_ID, client_id)
    }

    /// 获取 Riak 客户端 ID
    #[inline]
    pub fn client_id(&self) -> Option<&str> {
        self.header(CLIENT_ID)
    }

    /// 设置 Accept HTTP 头
    #[inline]
    pub fn set_accept(&mut self, accept: impl Into<String>) -> &mut Self {
        self.set_header(ACCEPT, accept)
    }

    /// 获取 Accept HTTP 头
    #[inline]
    pub fn accept(&self) -> Option<&str> {
        self.header(ACCEPT)
    }

    /// 设置 Content-Type HTTP 头
    #[inline]
    pub fn set_content_type(&mut self, content_type: impl Into<String>) -> &mut Self {
        self.set_header(CONTENT_TYPE, content_type)
    }

    /// 获取 Content-Type HTTP 头
    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    /// 是否既没有查询参数也没有 HTTP 头
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.query_params.is_empty() && self.headers.is_empty()
    }

    /// 合并另一个请求元信息
    ///
    /// `other` 中的查询参数和 HTTP 头将覆盖当前同名的值，新出现的键按照 `other` 中的顺序追加在末尾
    pub fn merge(&mut self, other: &RequestMeta) -> &mut Self {
        for (key, value) in other.query_params.iter() {
            self.set_query_param(key.to_owned(), value.to_owned());
        }
        for (key, value) in other.headers.iter() {
            self.set_header(key.to_owned(), value.to_owned());
        }
        self
    }

    /// 将查询参数追加到 URL 已有的查询字符串之后
    #[inline]
    pub fn apply_to_url(&self, url: &mut Url) {
        query::append_query(url, &self.query_params())
    }

    /// 生成 HTTP 头列表
    ///
    /// HTTP 头名称不区分大小写，仅大小写不同的多个 HTTP 头将只保留最后一个
    #[inline]
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        header::to_header_map(self.headers.iter().map(|(key, value)| (key.as_str(), value.as_str())))
    }
}

impl Display for RequestMeta {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        query::write_query_pairs(f, self.query_pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_params() {
        env_logger::builder().is_test(true).try_init().ok();

        let meta = RequestMeta::read_params(Some(10));
        assert_eq!(meta.query_param("r"), Some("10"));
        assert_eq!(meta.query_params(), "r=10");
        assert!(meta.headers().is_empty());

        let meta = RequestMeta::read_params(Some(-1));
        assert_eq!(meta.query_param("r"), Some("-1"));

        let meta = RequestMeta::read_params(None);
        assert_eq!(meta.query_param("r"), None);
        assert!(meta.is_empty());
    }

    #[test]
    fn test_write_params() {
        env_logger::builder().is_test(true).try_init().ok();

        let meta = RequestMeta::write_params(Some(10), Some(11));
        assert_eq!(meta.query_param("w"), Some("10"));
        assert_eq!(meta.query_param("dw"), Some("11"));
        assert_eq!(meta.query_params(), "w=10&dw=11");

        let meta = RequestMeta::write_params(Some(10), None);
        assert_eq!(meta.query_param("w"), Some("10"));
        assert_eq!(meta.query_param("dw"), None);
        assert_eq!(meta.query_params(), "w=10");

        let meta = RequestMeta::write_params(None, Some(11));
        assert_eq!(meta.query_param("w"), None);
        assert_eq!(meta.query_params(), "dw=11");
    }

    #[test]
    fn test_delete_params() {
        env_logger::builder().is_test(true).try_init().ok();

        assert_eq!(RequestMeta::delete_params(Some(10)).query_param("rw"), Some("10"));
        assert_eq!(RequestMeta::delete_params(None).query_param("rw"), None);
    }

    #[test]
    fn test_absent_is_not_empty_string() {
        let mut meta = RequestMeta::new();
        meta.set_query_param("empty", "").set_header("X-Empty", "");
        assert_eq!(meta.query_param("empty"), Some(""));
        assert_eq!(meta.query_param("missing"), None);
        assert_eq!(meta.header("X-Empty"), Some(""));
        assert_eq!(meta.header("X-Missing"), None);
        assert_eq!(meta.query_params(), "empty=");
    }

    #[test]
    fn test_overwrite_keeps_position() {
        env_logger::builder().is_test(true).try_init().ok();

        let mut meta = RequestMeta::new();
        meta.set_query_param("p1", "v1")
            .set_query_param("p2", "v2")
            .set_query_param("p1", "v3");
        assert_eq!(meta.query_params(), "p1=v3&p2=v2");
    }

    #[test]
    fn test_set_optional_removes() {
        let mut meta = RequestMeta::write_params(Some(2), Some(1));
        meta.set_optional_query_param("w", None::<&str>);
        assert!(!meta.has_query_param("w"));
        assert_eq!(meta.query_params(), "dw=1");

        meta.set_optional_header("X-Riak-Vclock", Some("a85hYGBgzGDKBVIc"));
        assert!(meta.has_header("X-Riak-Vclock"));
        meta.set_optional_header("X-Riak-Vclock", None::<String>);
        assert!(!meta.has_header("X-Riak-Vclock"));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut meta = RequestMeta::new();
        meta.set_query_param("a", "1")
            .set_query_param("b", "2")
            .set_query_param("c", "3");
        assert_eq!(meta.remove_query_param("b"), Some("2".to_owned()));
        assert_eq!(meta.remove_query_param("b"), None);
        assert_eq!(meta.query_params(), "a=1&c=3");
    }

    #[test]
    fn test_values_are_encoded_only_when_rendered() {
        let mut meta = RequestMeta::new();
        meta.set_query_param("returnbody", "true")
            .set_query_param("tag", "a&b=c d");
        assert_eq!(meta.query_param("tag"), Some("a&b=c d"));
        assert_eq!(meta.query_params(), "returnbody=true&tag=a%26b%3Dc%20d");
        assert_eq!(meta.to_string(), meta.query_params());
    }

    #[test]
    fn test_well_known_headers() {
        let mut meta = RequestMeta::new();
        meta.set_client_id("AAAAAQ==")
            .set_accept("multipart/mixed, */*;q=0.5")
            .set_content_type("application/json");
        assert_eq!(meta.client_id(), Some("AAAAAQ=="));
        assert_eq!(meta.header("X-Riak-ClientId"), Some("AAAAAQ=="));
        assert_eq!(meta.accept(), Some("multipart/mixed, */*;q=0.5"));
        assert_eq!(meta.content_type(), Some("application/json"));
        assert_eq!(
            meta.headers().keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["X-Riak-ClientId", "Accept", "Content-Type"]
        );
        assert_eq!(meta.query_params(), "");
    }

    #[test]
    fn test_merge() {
        let mut meta = RequestMeta::read_params(Some(1));
        meta.set_client_id("client-a");

        let mut other = RequestMeta::read_params(Some(3));
        other.set_query_param("notfound_ok", "false").set_client_id("client-b");

        meta.merge(&other);
        assert_eq!(meta.query_params(), "r=3&notfound_ok=false");
        assert_eq!(meta.client_id(), Some("client-b"));
        assert_eq!(meta.headers().len(), 1);
    }

    #[test]
    fn test_apply_to_url() {
        let mut url = Url::parse("http://127.0.0.1:8098/riak/bucket/key?vtag=abc").unwrap();
        RequestMeta::new().apply_to_url(&mut url);
        assert_eq!(url.query(), Some("vtag=abc"));

        RequestMeta::read_params(Some(2)).apply_to_url(&mut url);
        assert_eq!(url.as_str(), "http://127.0.0.1:8098/riak/bucket/key?vtag=abc&r=2");

        let mut url = Url::parse("http://127.0.0.1:8098/riak/bucket/key?a=1&&b=2&").unwrap();
        RequestMeta::read_params(Some(2)).apply_to_url(&mut url);
        assert_eq!(url.query(), Some("a=1&b=2&r=2"));
    }
}
