//! Weather Command Handlers
//!
//! 远端天气 API:
//! GET {base_url}/data/2.5/weather?q={city}&appid={api_key}&units=metric
//! Response: {"name": "...", "main": {"temp": 20.0}, "weather": [{"description": "..."}]}

use serde::Deserialize;
use std::sync::Arc;

use crate::application::commands::FetchWeatherCommand;
use crate::application::error::LookupError;
use crate::application::ports::{HttpTransportPort, OutputSinkPort, TransportError};
use crate::domain::weather::{LookupRequest, LookupResult, TemperatureRange};

/// 天气响应体中用到的字段
#[derive(Debug, Deserialize)]
struct WeatherHttpResponse {
    name: String,
    main: MainBlock,
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    description: String,
}

/// 天气查询配置
#[derive(Debug, Clone)]
pub struct FetchWeatherConfig {
    /// 天气服务基础 URL
    pub base_url: String,
    /// 静态 API Key
    pub api_key: String,
    /// 单位制（metric 对应摄氏度）
    pub units: String,
    /// 可接受温度范围
    pub range: TemperatureRange,
}

impl Default for FetchWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org".to_string(),
            api_key: String::new(),
            units: "metric".to_string(),
            range: TemperatureRange::default(),
        }
    }
}

/// FetchWeather Handler - 查询当前天气并按温度分级
pub struct FetchWeatherHandler {
    config: FetchWeatherConfig,
    transport: Arc<dyn HttpTransportPort>,
    output: Arc<dyn OutputSinkPort>,
}

impl FetchWeatherHandler {
    pub fn new(
        config: FetchWeatherConfig,
        transport: Arc<dyn HttpTransportPort>,
        output: Arc<dyn OutputSinkPort>,
    ) -> Self {
        Self {
            config,
            transport,
            output,
        }
    }

    /// 构造查询 URL
    pub fn request_url(&self, request: &LookupRequest) -> Result<String, LookupError> {
        let endpoint = format!(
            "{}/data/2.5/weather",
            self.config.base_url.trim_end_matches('/')
        );
        let url = reqwest::Url::parse_with_params(
            &endpoint,
            &[
                ("q", request.subject()),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
            ],
        )
        .map_err(|e| LookupError::InvalidEndpoint(e.to_string()))?;

        Ok(url.into())
    }

    /// 查询并分级
    ///
    /// 非 2xx 状态直接返回 `Transport`，不读取响应体
    pub async fn handle(&self, cmd: FetchWeatherCommand) -> Result<LookupResult, LookupError> {
        let request = LookupRequest::new(&cmd.subject).ok_or(LookupError::InvalidSubject)?;
        let url = self.request_url(&request)?;

        tracing::debug!(subject = %request.subject(), "Sending weather request");

        let mut response = self.transport.perform_get(&url).await?;

        if !response.ok() {
            return Err(TransportError::Status {
                status: response.status(),
            }
            .into());
        }

        let body = response.json_body().await?;
        let parsed: WeatherHttpResponse =
            serde_json::from_value(body).map_err(|e| LookupError::Parse(e.to_string()))?;

        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(|| LookupError::Parse("weather conditions list is empty".to_string()))?;

        let metric_value = self.config.range.classify(parsed.main.temp)?;

        tracing::info!(
            subject = %request.subject(),
            city = %parsed.name,
            temp = metric_value,
            "Weather lookup completed"
        );

        Ok(LookupResult {
            subject_name: parsed.name,
            metric_value,
            description,
        })
    }

    /// 查询并输出结果
    ///
    /// 所有失败都在此处记录并写入输出，之后以值的形式返回给调用方
    pub async fn report(&self, cmd: FetchWeatherCommand) -> Result<LookupResult, LookupError> {
        let subject = cmd.subject.clone();
        let result = self.handle(cmd).await;

        match &result {
            Ok(weather) => {
                self.output.emit(&format!("City: {}", weather.subject_name));
                self.output
                    .emit(&format!("Temperature: {} °C", weather.metric_value));
                self.output.emit(&format!("Weather: {}", weather.description));
            }
            Err(e) => {
                tracing::warn!(subject = %subject, error = %e, kind = e.name(), "Weather lookup failed");
                self.output.emit(&format!("{}: {}", e.name(), e.user_message()));
            }
        }

        result
    }
}
