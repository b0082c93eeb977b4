//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

use crate::application::FetchWeatherConfig;
use crate::domain::weather::TemperatureRange;
use crate::infrastructure::worker::BatchRunnerConfig;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 天气服务配置
    #[serde(default)]
    pub weather: WeatherConfig,

    /// 温度阈值
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// 批量发送配置
    #[serde(default)]
    pub batch: BatchConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// 天气查询处理器配置
    pub fn fetch_weather_config(&self) -> Result<FetchWeatherConfig, &'static str> {
        Ok(FetchWeatherConfig {
            base_url: self.weather.base_url.clone(),
            api_key: self.weather.api_key.clone(),
            units: self.weather.units.clone(),
            range: TemperatureRange::new(self.thresholds.min, self.thresholds.max)?,
        })
    }
}

/// 天气服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// 服务基础 URL
    #[serde(default = "default_weather_url")]
    pub base_url: String,

    /// API Key
    #[serde(default)]
    pub api_key: String,

    /// 单位制
    #[serde(default = "default_units")]
    pub units: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_weather_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            api_key: String::new(),
            units: default_units(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherConfig {
    /// 日志中显示的 API Key
    pub fn masked_api_key(&self) -> String {
        if self.api_key.is_empty() {
            return "<unset>".to_string();
        }
        let visible: String = self.api_key.chars().take(4).collect();
        format!("{}****", visible)
    }
}

/// 温度阈值（°C，闭区间）
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_min_temp")]
    pub min: f64,

    #[serde(default = "default_max_temp")]
    pub max: f64,
}

fn default_min_temp() -> f64 {
    0.0
}

fn default_max_temp() -> f64 {
    35.0
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            min: default_min_temp(),
            max: default_max_temp(),
        }
    }
}

/// 批量发送配置
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// 报告接收人
    #[serde(default = "default_recipients")]
    pub recipients: Vec<String>,

    /// 单个任务最大模拟延迟（毫秒）
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// 单个任务成功概率
    #[serde(default = "default_success_probability")]
    pub success_probability: f64,
}

fn default_recipients() -> Vec<String> {
    [
        "user1@gmail.com",
        "john.doe@yahoo.com",
        "admin@company.com",
        "support@service.in",
        "hello.world@outlook.com",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_max_delay_ms() -> u64 {
    9000
}

fn default_success_probability() -> f64 {
    0.6 // 原始抽样 0..=9 中 0..=5 为成功
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            recipients: default_recipients(),
            max_delay_ms: default_max_delay_ms(),
            success_probability: default_success_probability(),
        }
    }
}

impl BatchConfig {
    pub fn runner_config(&self) -> BatchRunnerConfig {
        BatchRunnerConfig {
            max_delay: Duration::from_millis(self.max_delay_ms),
            ..Default::default()
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
