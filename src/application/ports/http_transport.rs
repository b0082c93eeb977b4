//! HTTP Transport Port - 远端 GET 请求抽象
//!
//! 核心只依赖 `perform_get(url) -> { ok, status, json_body }` 这一形状，
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 传输错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl TransportError {
    /// 面向用户的提示
    pub fn user_message(&self) -> &'static str {
        match self {
            TransportError::Status { status: 404 } => "city not found",
            TransportError::MalformedBody(_) => "unexpected response format",
            _ => "could not retrieve data",
        }
    }
}

/// 远端响应
///
/// 状态码可立即读取，响应体需要再次挂起才能取得
#[async_trait]
pub trait HttpResponsePort: Send {
    /// HTTP 状态码
    fn status(&self) -> u16;

    /// 是否为 2xx
    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// 读取并解析 JSON 响应体（只能读取一次）
    async fn json_body(&mut self) -> Result<serde_json::Value, TransportError>;
}

/// HTTP Transport Port
#[async_trait]
pub trait HttpTransportPort: Send + Sync {
    async fn perform_get(&self, url: &str) -> Result<Box<dyn HttpResponsePort>, TransportError>;
}
