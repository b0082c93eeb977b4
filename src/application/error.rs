//! 应用层错误定义
//!
//! 天气查询边界上的封闭错误类型，调用方按变体匹配

use thiserror::Error;

use crate::application::ports::TransportError;
use crate::domain::weather::ClassificationError;

/// 天气查询错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// 城市名为空
    #[error("City name must not be empty")]
    InvalidSubject,

    /// 无法构造请求地址
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// 远端调用失败或返回非成功状态
    #[error(transparent)]
    Transport(TransportError),

    /// 响应体格式不符合预期
    #[error("Unexpected response format: {0}")]
    Parse(String),

    /// 温度超出可接受范围
    #[error(transparent)]
    Classification(#[from] ClassificationError),
}

impl LookupError {
    /// 输出行使用的错误名
    pub fn name(&self) -> &'static str {
        match self {
            LookupError::InvalidSubject => "InvalidInputError",
            LookupError::InvalidEndpoint(_) => "ConfigurationError",
            LookupError::Transport(_) => "TransportError",
            LookupError::Parse(_) => "ParseError",
            LookupError::Classification(_) => "ClassificationError",
        }
    }

    /// 面向用户的提示
    pub fn user_message(&self) -> String {
        match self {
            LookupError::InvalidSubject => "please enter a city name".to_string(),
            LookupError::InvalidEndpoint(_) => "weather service is misconfigured".to_string(),
            LookupError::Transport(e) => e.user_message().to_string(),
            LookupError::Parse(_) => "unexpected response format".to_string(),
            LookupError::Classification(e) => e.to_string(),
        }
    }
}

impl From<TransportError> for LookupError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::MalformedBody(message) => LookupError::Parse(message),
            other => LookupError::Transport(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_body_maps_to_parse() {
        let err: LookupError = TransportError::MalformedBody("eof".to_string()).into();
        assert!(matches!(err, LookupError::Parse(_)));
        assert_eq!(err.name(), "ParseError");
    }

    #[test]
    fn test_user_messages() {
        let not_found: LookupError = TransportError::Status { status: 404 }.into();
        assert_eq!(not_found.user_message(), "city not found");

        let unavailable: LookupError = TransportError::Status { status: 503 }.into();
        assert_eq!(unavailable.user_message(), "could not retrieve data");

        let timeout: LookupError = TransportError::Timeout.into();
        assert_eq!(timeout.name(), "TransportError");

        let cold = LookupError::from(ClassificationError::TooLow {
            value: -5.0,
            min: 0.0,
        });
        assert!(cold.user_message().starts_with("Too cold weather"));
    }
}
