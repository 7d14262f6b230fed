//! IP / 地理位置查询服务
//!
//! - `provider`：上游查询 trait 与数据结构
//! - `ifconfig`：基于 ureq 的 ifconfig.co 风格实现
//! - `gateway`：HTTP 层与 CLI 共用的网关

mod gateway;
mod ifconfig;
mod provider;

pub use gateway::{HELP_ENTRIES, LookupGateway};
pub use ifconfig::IfconfigProvider;
pub use provider::{GeoRecord, LookupProvider, RawProviderResponse};
