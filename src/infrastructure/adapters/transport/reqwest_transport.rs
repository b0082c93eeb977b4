//! Reqwest Transport - 通过 reqwest 发起远端 GET 请求
//!
//! 实现 HttpTransportPort trait；状态码立即返回，响应体延迟到 `json_body` 读取

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

use crate::application::ports::{HttpResponsePort, HttpTransportPort, TransportError};

/// Reqwest 客户端配置
#[derive(Debug, Clone)]
pub struct ReqwestTransportConfig {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent
    pub user_agent: String,
}

impl Default for ReqwestTransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("weatherdash/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ReqwestTransportConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Reqwest 传输实现
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: ReqwestTransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_decode() {
        TransportError::MalformedBody(e.to_string())
    } else if e.is_connect() {
        TransportError::Network(format!("Cannot connect to weather service: {}", e))
    } else {
        TransportError::Network(e.to_string())
    }
}

/// 尚未读取响应体的远端响应
struct ReqwestResponse {
    status: StatusCode,
    response: Option<Response>,
}

#[async_trait]
impl HttpResponsePort for ReqwestResponse {
    fn status(&self) -> u16 {
        self.status.as_u16()
    }

    fn ok(&self) -> bool {
        self.status.is_success()
    }

    async fn json_body(&mut self) -> Result<serde_json::Value, TransportError> {
        let response = self
            .response
            .take()
            .ok_or_else(|| TransportError::Network("Response body already consumed".to_string()))?;

        response
            .json::<serde_json::Value>()
            .await
            .map_err(map_reqwest_error)
    }
}

#[async_trait]
impl HttpTransportPort for ReqwestTransport {
    async fn perform_get(&self, url: &str) -> Result<Box<dyn HttpResponsePort>, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Weather service responded");

        Ok(Box::new(ReqwestResponse {
            status,
            response: Some(response),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ReqwestTransportConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("weatherdash/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ReqwestTransportConfig::default().with_timeout(3);
        assert_eq!(config.timeout_secs, 3);
    }

    #[tokio::test]
    async fn test_invalid_url_is_transport_error() {
        let transport = ReqwestTransport::new(ReqwestTransportConfig::default()).unwrap();

        let result = transport.perform_get("not a url").await;

        assert!(matches!(result, Err(TransportError::Network(_))));
    }

    #[tokio::test]
    #[ignore = "opens a real TCP connection to 127.0.0.1:9"]
    async fn test_unreachable_host_is_transport_error() {
        let transport = ReqwestTransport::new(ReqwestTransportConfig::default().with_timeout(2))
            .unwrap();

        let result = transport.perform_get("http://127.0.0.1:9/weather").await;

        assert!(matches!(
            result,
            Err(TransportError::Network(_)) | Err(TransportError::Timeout)
        ));
    }
}
