//! ifconfig.co 风格的上游实现
//!
//! - `GET {base_url}{ip_path}`：纯文本返回调用方公网 IP
//! - `GET {base_url}{info_path}?ip={ip}`：返回 JSON 对象
//!
//! 不缓存、不重试，每次调用都会请求上游

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;
use ureq::http::StatusCode;

use super::provider::{LookupProvider, RawProviderResponse};
use crate::config::UpstreamConfig;
use crate::errors::{GatewayError, Result};

/// ifconfig.co 风格的 HTTP Provider
///
/// ureq 的 Agent 是 Send + Sync，内部连接池在所有请求之间共享
pub struct IfconfigProvider {
    agent: Agent,
    ip_url: String,
    info_url_base: String,
    user_agent: String,
}

impl IfconfigProvider {
    pub fn new(config: &UpstreamConfig) -> Self {
        // 非 2xx 由 check_status 处理，保留状态码和 body
        let agent: Agent = Agent::config_builder()
            .timeout_global(config.timeout_secs.map(Duration::from_secs))
            .http_status_as_error(false)
            .build()
            .into();

        let base = config.base_url.trim_end_matches('/');

        Self {
            agent,
            ip_url: format!("{}{}", base, config.ip_path),
            info_url_base: format!("{}{}", base, config.info_path),
            user_agent: config.user_agent.clone(),
        }
    }

    /// 构建信息查询 URL，空 IP 会生成 `?ip=`
    pub fn info_url(&self, ip: &str) -> String {
        format!("{}?ip={}", self.info_url_base, urlencoding::encode(ip))
    }

    pub fn ip_url(&self) -> &str {
        &self.ip_url
    }

    /// 发起 GET 请求并读取文本 body（同步，在 spawn_blocking 中调用）
    fn get_text_sync(agent: &Agent, url: &str, user_agent: &str) -> Result<String> {
        let resp = agent
            .get(url)
            .header("User-Agent", user_agent)
            .call()
            .map_err(|e| map_call_error(url, e))?;

        check_status(url, resp.status())?;

        resp.into_body().read_to_string().map_err(|e| {
            GatewayError::upstream_malformed_body(format!(
                "failed to read response body from {}: {}",
                url, e
            ))
        })
    }

    /// 在线程池中执行同步 HTTP 请求
    async fn get_text(&self, url: String) -> Result<String> {
        let agent = self.agent.clone();
        let user_agent = self.user_agent.clone();

        let result =
            tokio::task::spawn_blocking(move || Self::get_text_sync(&agent, &url, &user_agent))
                .await?;

        if let Err(ref e) = result {
            warn!("Upstream request failed: {}", e);
        }
        result
    }
}

/// 非 2xx 状态码 → UpstreamBadStatus
fn check_status(url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(GatewayError::upstream_bad_status(format!(
            "{} returned HTTP {}",
            url,
            status.as_u16()
        )))
    }
}

/// 传输层错误（DNS、连接、超时等）→ UpstreamUnreachable
fn map_call_error(url: &str, err: ureq::Error) -> GatewayError {
    GatewayError::upstream_unreachable(format!("request to {} failed: {}", url, err))
}

/// 解析 JSON body，必须是对象
fn parse_object(url: &str, body: &str) -> Result<RawProviderResponse> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(GatewayError::upstream_malformed_body(format!(
            "{} returned JSON {} instead of an object",
            url,
            json_kind(&other)
        ))),
        Err(e) => Err(GatewayError::upstream_malformed_body(format!(
            "{} returned invalid JSON: {}",
            url, e
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[async_trait]
impl LookupProvider for IfconfigProvider {
    async fn fetch_self_ip(&self) -> Result<String> {
        let body = self.get_text(self.ip_url.clone()).await?;
        let ip = body.trim().to_string();
        debug!("Resolved public IP: {}", ip);
        Ok(ip)
    }

    async fn fetch_info(&self, ip: &str) -> Result<RawProviderResponse> {
        let url = self.info_url(ip);
        trace!("Fetching IP info from {}", url);

        let body = self.get_text(url.clone()).await?;
        let data = parse_object(&url, &body).inspect_err(|e| {
            warn!("Upstream response parse failed: {}", e);
        })?;

        trace!("Upstream returned {} fields for ip={:?}", data.len(), ip);
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "ifconfig"
    }
}
