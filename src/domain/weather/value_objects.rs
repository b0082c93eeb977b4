//! Weather Context - Value Objects

use serde::{Deserialize, Serialize};

use super::ClassificationError;

/// 天气查询请求
///
/// 城市名去除首尾空白后不能为空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    subject: String,
}

impl LookupRequest {
    pub fn new(subject: impl AsRef<str>) -> Option<Self> {
        let subject = subject.as_ref().trim();
        if subject.is_empty() {
            return None;
        }
        Some(Self {
            subject: subject.to_string(),
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// 天气查询结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    /// 服务端返回的城市名
    pub subject_name: String,
    /// 温度（°C）
    pub metric_value: f64,
    /// 天气描述
    pub description: String,
}

/// 可接受温度范围（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    min: f64,
    max: f64,
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 35.0,
        }
    }
}

impl TemperatureRange {
    pub fn new(min: f64, max: f64) -> Result<Self, &'static str> {
        if !min.is_finite() || !max.is_finite() {
            return Err("Temperature bounds must be finite");
        }
        if min > max {
            return Err("Minimum temperature must not exceed maximum");
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// 按阈值分级
    ///
    /// - `value < min` → `TooLow`
    /// - `value > max` → `TooHigh`
    /// - 其余（含边界）接受
    pub fn classify(&self, value: f64) -> Result<f64, ClassificationError> {
        if value < self.min {
            return Err(ClassificationError::TooLow {
                value,
                min: self.min,
            });
        }
        if value > self.max {
            return Err(ClassificationError::TooHigh {
                value,
                max: self.max,
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_subject() {
        let request = LookupRequest::new("  Jammu ").unwrap();
        assert_eq!(request.subject(), "Jammu");
    }

    #[test]
    fn test_request_rejects_blank_subject() {
        assert!(LookupRequest::new("").is_none());
        assert!(LookupRequest::new("   ").is_none());
    }

    #[test]
    fn test_classify_default_range() {
        let range = TemperatureRange::default();

        for value in [-40.0, -5.0, -0.01] {
            assert!(matches!(
                range.classify(value),
                Err(ClassificationError::TooLow { .. })
            ));
        }
        for value in [35.01, 36.0, 50.0] {
            assert!(matches!(
                range.classify(value),
                Err(ClassificationError::TooHigh { .. })
            ));
        }
        for value in [0.0, 0.5, 20.0, 34.99, 35.0] {
            assert_eq!(range.classify(value), Ok(value));
        }
    }

    #[test]
    fn test_classification_messages_are_distinct() {
        let range = TemperatureRange::default();
        let cold = range.classify(-5.0).unwrap_err();
        let hot = range.classify(40.0).unwrap_err();

        assert!(cold.to_string().starts_with("Too cold weather"));
        assert!(hot.to_string().starts_with("Too hot weather"));
        assert_eq!(cold.value(), -5.0);
        assert_eq!(hot.kind(), "too_high");
    }

    #[test]
    fn test_range_validation() {
        assert!(TemperatureRange::new(10.0, 5.0).is_err());
        assert!(TemperatureRange::new(f64::NAN, 5.0).is_err());

        let range = TemperatureRange::new(-10.0, 10.0).unwrap();
        assert!(range.classify(-5.0).is_ok());
        assert!(range.classify(11.0).is_err());
    }
}
