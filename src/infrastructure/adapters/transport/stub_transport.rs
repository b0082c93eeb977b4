//! Stub Transport - 用于测试的固定响应
//!
//! 不发起网络请求，记录请求 URL 与响应体读取次数

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::application::ports::{HttpResponsePort, HttpTransportPort, TransportError};

#[derive(Debug, Clone)]
enum StubReply {
    Json { status: u16, body: Value },
    Malformed { status: u16, message: String },
    Fail(TransportError),
}

/// Stub Transport
pub struct StubTransport {
    reply: StubReply,
    requests: Mutex<Vec<String>>,
    body_reads: Arc<AtomicUsize>,
}

impl StubTransport {
    fn with_reply(reply: StubReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
            body_reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// 返回指定状态码和 JSON 响应体
    pub fn json(status: u16, body: Value) -> Self {
        Self::with_reply(StubReply::Json { status, body })
    }

    /// 返回 200 和天气服务格式的响应体
    pub fn weather(city: &str, temp: f64, description: &str) -> Self {
        Self::json(
            200,
            json!({
                "name": city,
                "main": { "temp": temp },
                "weather": [{ "description": description }],
            }),
        )
    }

    /// 响应体无法解析为 JSON
    pub fn malformed(status: u16, message: impl Into<String>) -> Self {
        Self::with_reply(StubReply::Malformed {
            status,
            message: message.into(),
        })
    }

    /// 请求无法完成
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::with_reply(StubReply::Fail(TransportError::Network(message.into())))
    }

    pub fn timeout() -> Self {
        Self::with_reply(StubReply::Fail(TransportError::Timeout))
    }

    /// 已收到的请求 URL
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// 响应体被读取的次数
    pub fn body_reads(&self) -> usize {
        self.body_reads.load(Ordering::SeqCst)
    }
}

struct StubResponse {
    status: u16,
    body: Result<Value, TransportError>,
    body_reads: Arc<AtomicUsize>,
}

#[async_trait]
impl HttpResponsePort for StubResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn json_body(&mut self) -> Result<Value, TransportError> {
        self.body_reads.fetch_add(1, Ordering::SeqCst);
        self.body.clone()
    }
}

#[async_trait]
impl HttpTransportPort for StubTransport {
    async fn perform_get(&self, url: &str) -> Result<Box<dyn HttpResponsePort>, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        let (status, body) = match &self.reply {
            StubReply::Json { status, body } => (*status, Ok(body.clone())),
            StubReply::Malformed { status, message } => {
                (*status, Err(TransportError::MalformedBody(message.clone())))
            }
            StubReply::Fail(e) => return Err(e.clone()),
        };

        Ok(Box::new(StubResponse {
            status,
            body,
            body_reads: self.body_reads.clone(),
        }))
    }
}
