//! Weather Context - Errors

use thiserror::Error;

/// 温度分级错误
///
/// 远端服务可达、数据合法，但温度超出可接受范围
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassificationError {
    #[error("Too cold weather: {value} °C is below {min} °C")]
    TooLow { value: f64, min: f64 },

    #[error("Too hot weather: {value} °C is above {max} °C")]
    TooHigh { value: f64, max: f64 },
}

impl ClassificationError {
    /// 触发分级的温度值
    pub fn value(&self) -> f64 {
        match self {
            ClassificationError::TooLow { value, .. } => *value,
            ClassificationError::TooHigh { value, .. } => *value,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ClassificationError::TooLow { .. } => "too_low",
            ClassificationError::TooHigh { .. } => "too_high",
        }
    }
}
