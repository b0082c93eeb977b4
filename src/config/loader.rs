//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（weatherdash.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["weatherdash", "weatherdash.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "WEATHERDASH";

/// 加载应用配置
///
/// # 环境变量示例
/// - `WEATHERDASH_WEATHER__API_KEY=xxxx`
/// - `WEATHERDASH_THRESHOLDS__MAX=40`
/// - `WEATHERDASH_BATCH__SUCCESS_PROBABILITY=0.8`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值
    builder = builder
        .set_default("weather.base_url", "https://api.openweathermap.org")?
        .set_default("weather.api_key", "")?
        .set_default("weather.units", "metric")?
        .set_default("weather.timeout_secs", 10)?
        .set_default("thresholds.min", 0.0)?
        .set_default("thresholds.max", 35.0)?
        .set_default("batch.max_delay_ms", 9000)?
        .set_default("batch.success_probability", 0.6)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.weather.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Weather base URL cannot be empty".to_string(),
        ));
    }

    if reqwest::Url::parse(&config.weather.base_url).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "Weather base URL is not a valid URL: {}",
            config.weather.base_url
        )));
    }

    if config.weather.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Weather timeout cannot be 0".to_string(),
        ));
    }

    config
        .fetch_weather_config()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    let p = config.batch.success_probability;
    if !(0.0..=1.0).contains(&p) {
        return Err(ConfigError::ValidationError(format!(
            "Success probability must be within [0, 1], got {}",
            p
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Weather URL: {}", config.weather.base_url);
    tracing::info!("Weather API Key: {}", config.weather.masked_api_key());
    tracing::info!("Weather Timeout: {}s", config.weather.timeout_secs);
    tracing::info!(
        "Accepted Range: {} °C ..= {} °C",
        config.thresholds.min,
        config.thresholds.max
    );
    tracing::info!("Recipients: {}", config.batch.recipients.len());
    tracing::info!("Max Delay: {}ms", config.batch.max_delay_ms);
    tracing::info!("Success Probability: {}", config.batch.success_probability);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
