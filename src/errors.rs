use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    UpstreamUnreachable(String),
    UpstreamBadStatus(String),
    UpstreamMalformedBody(String),
    Internal(String),
}

impl GatewayError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::UpstreamUnreachable(_) => "E001",
            GatewayError::UpstreamBadStatus(_) => "E002",
            GatewayError::UpstreamMalformedBody(_) => "E003",
            GatewayError::Internal(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GatewayError::UpstreamUnreachable(_) => "Upstream Unreachable",
            GatewayError::UpstreamBadStatus(_) => "Upstream Bad Status",
            GatewayError::UpstreamMalformedBody(_) => "Upstream Malformed Body",
            GatewayError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GatewayError::UpstreamUnreachable(msg) => msg,
            GatewayError::UpstreamBadStatus(msg) => msg,
            GatewayError::UpstreamMalformedBody(msg) => msg,
            GatewayError::Internal(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于日志和 HTTP 响应）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GatewayError {}

// 便捷的构造函数
impl GatewayError {
    pub fn upstream_unreachable<T: Into<String>>(msg: T) -> Self {
        GatewayError::UpstreamUnreachable(msg.into())
    }

    pub fn upstream_bad_status<T: Into<String>>(msg: T) -> Self {
        GatewayError::UpstreamBadStatus(msg.into())
    }

    pub fn upstream_malformed_body<T: Into<String>>(msg: T) -> Self {
        GatewayError::UpstreamMalformedBody(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        GatewayError::Internal(msg.into())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::UpstreamMalformedBody(err.to_string())
    }
}

impl From<tokio::task::JoinError> for GatewayError {
    fn from(err: tokio::task::JoinError) -> Self {
        GatewayError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
