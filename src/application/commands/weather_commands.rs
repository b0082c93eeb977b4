//! Weather Commands - 天气查询命令

/// 查询并分级当前天气
#[derive(Debug, Clone)]
pub struct FetchWeatherCommand {
    pub subject: String,
}

impl FetchWeatherCommand {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}
