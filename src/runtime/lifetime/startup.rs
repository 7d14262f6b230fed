use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{ApiConfig, ServerConfig, StaticConfig};
use crate::services::{IfconfigProvider, LookupGateway};

pub struct StartupContext {
    pub gateway: LookupGateway,
    pub api: ApiConfig,
    pub server: ServerConfig,
}

/// 根据上游配置构建网关（Server 与 CLI 共用）
pub fn build_gateway(config: &StaticConfig) -> LookupGateway {
    let provider = IfconfigProvider::new(&config.upstream);
    let gateway = LookupGateway::new(Arc::new(provider));
    info!(
        "Lookup gateway initialized with {} provider at {}",
        gateway.provider_name(),
        config.upstream.base_url
    );
    gateway
}

/// 准备服务器启动的上下文
pub fn prepare_server_startup(config: &StaticConfig) -> StartupContext {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let gateway = build_gateway(config);

    if config.api.all_errors_as_500 {
        info!("/all reports upstream failures with HTTP 500");
    }

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    StartupContext {
        gateway,
        api: config.api.clone(),
        server: config.server.clone(),
    }
}
