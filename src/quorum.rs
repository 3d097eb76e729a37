//! quorum 查询参数

use super::RequestMeta;
use serde::{Deserialize, Serialize};

/// 读操作 quorum 查询参数名称
pub const R: &str = "r";

/// 写操作 quorum 查询参数名称
pub const W: &str = "w";

/// 持久化写操作 quorum 查询参数名称
pub const DW: &str = "dw";

/// 删除操作 quorum 查询参数名称
pub const RW: &str = "rw";

/// 默认 quorum 配置
///
/// 通常作为客户端配置文件的一部分被反序列化，未设置的字段将不会出现在请求的查询参数中
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Quorums {
    /// 读操作 quorum
    pub r: Option<i32>,

    /// 写操作 quorum
    pub w: Option<i32>,

    /// 持久化写操作 quorum
    pub dw: Option<i32>,

    /// 删除操作 quorum
    pub rw: Option<i32>,
}

impl Quorums {
    /// 生成读操作请求元信息
    #[inline]
    pub fn read_meta(&self) -> RequestMeta {
        RequestMeta::read_params(self.r)
    }

    /// 生成写操作请求元信息
    #[inline]
    pub fn write_meta(&self) -> RequestMeta {
        RequestMeta::write_params(self.w, self.dw)
    }

    /// 生成删除操作请求元信息
    #[inline]
    pub fn delete_meta(&self) -> RequestMeta {
        RequestMeta::delete_params(self.rw)
    }
}
