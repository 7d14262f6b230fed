//! 上游查询抽象层
//!
//! 网关只依赖 `LookupProvider` trait，生产环境使用 ifconfig.co 风格的
//! HTTP 服务，测试中可替换为 mock 实现。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::Result;

/// 上游返回的原始 JSON 对象，原样透传
pub type RawProviderResponse = Map<String, Value>;

/// 地理位置信息
///
/// 五个字段总是存在，上游缺失时为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub ip: String,
    pub city: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
}

impl GeoRecord {
    /// 从上游 JSON 中提取字段
    pub fn from_provider(data: &RawProviderResponse) -> Self {
        Self {
            ip: field_as_string(data, "ip"),
            city: field_as_string(data, "city"),
            country: field_as_string(data, "country"),
            latitude: field_as_string(data, "latitude"),
            longitude: field_as_string(data, "longitude"),
        }
    }
}

/// 读取字段为字符串
///
/// 缺失或 null 为空字符串；数字等非字符串标量保留其 JSON 文本，不做解析
fn field_as_string(data: &RawProviderResponse, key: &str) -> String {
    match data.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// 上游查询 trait
#[async_trait]
pub trait LookupProvider: Send + Sync {
    /// 查询本机公网 IP（已去除首尾空白）
    async fn fetch_self_ip(&self) -> Result<String>;

    /// 查询 IP 信息，`ip` 为空表示查询调用方自身
    async fn fetch_info(&self, ip: &str) -> Result<RawProviderResponse>;

    /// 获取 provider 名称（用于日志）
    fn name(&self) -> &'static str;
}
