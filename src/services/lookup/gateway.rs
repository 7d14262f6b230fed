//! Lookup Gateway
//!
//! 组合上游查询：本机 IP、地理位置、原始信息，以及静态帮助信息。
//! 不持有任何请求级可变状态，可在所有 worker 之间共享。

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::provider::{GeoRecord, LookupProvider, RawProviderResponse};
use crate::errors::Result;

/// 路由 → 说明
pub const HELP_ENTRIES: [(&str, &str); 5] = [
    ("/", "Welcome message with available endpoints."),
    ("/ip", "Get the server's public IP address."),
    (
        "/geo",
        "Get the geolocation information of the server's public IP address.",
    ),
    (
        "/all",
        "Get all data the upstream provider reports for an IP address (query: ip, default: the caller).",
    ),
    ("/help", "This help message."),
];

#[derive(Clone)]
pub struct LookupGateway {
    provider: Arc<dyn LookupProvider>,
}

impl LookupGateway {
    pub fn new(provider: Arc<dyn LookupProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// 查询本服务的公网 IP
    pub async fn resolve_self_ip(&self) -> Result<String> {
        self.provider.fetch_self_ip().await
    }

    /// 查询地理位置，`ip` 为空时由上游按调用方地址解析
    pub async fn resolve_geolocation(&self, ip: &str) -> Result<GeoRecord> {
        let data = self.provider.fetch_info(ip).await?;
        let record = GeoRecord::from_provider(&data);
        debug!(
            "Geolocation for {:?}: city={:?}, country={:?}",
            ip, record.city, record.country
        );
        Ok(record)
    }

    /// 原样返回上游 JSON
    pub async fn resolve_all(&self, ip: &str) -> Result<RawProviderResponse> {
        self.provider.fetch_info(ip).await
    }

    pub fn help() -> BTreeMap<&'static str, &'static str> {
        HELP_ENTRIES.into_iter().collect()
    }
}
