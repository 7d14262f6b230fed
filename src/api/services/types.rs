//! HTTP 响应类型定义

use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;

/// `GET /ip` 成功响应
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IpResponse {
    pub ip: String,
}

/// 错误响应，只有一个 `error` 字段
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    pub fn new<T: Into<String>>(error: T) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 本机 IP 查询失败
    pub fn self_ip(err: &GatewayError) -> Self {
        Self::new(format!("Error occurred: {}", err))
    }

    /// 地理位置查询失败
    pub fn geolocation(err: &GatewayError) -> Self {
        Self::new(format!("Error occurred while fetching geolocation: {}", err))
    }

    /// 原始信息查询失败
    pub fn all_data(err: &GatewayError) -> Self {
        Self::new(format!(
            "Error occurred while fetching data from server: {}",
            err
        ))
    }
}

/// `GET /` 响应
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}

/// `GET /all` 查询参数
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AllQuery {
    #[serde(default)]
    pub ip: String,
}

impl AllQuery {
    /// 从原始查询对构建，`ip` 重复出现时取最后一个，未知参数忽略
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let ip = pairs
            .into_iter()
            .filter(|(key, _)| key == "ip")
            .map(|(_, value)| value)
            .last()
            .unwrap_or_default();
        Self { ip }
    }
}
