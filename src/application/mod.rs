//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（HttpTransport、DecisionSource、OutputSink、BatchRunner）
//! - commands: 天气查询 / 看板命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    DashboardOutcome,
    FetchWeatherCommand,
    RunDashboardCommand,
    // Handlers
    handlers::{DashboardHandler, FetchWeatherConfig, FetchWeatherHandler},
};

pub use error::LookupError;

pub use ports::{
    BatchRunnerPort,
    DecisionSourcePort,
    HttpResponsePort,
    HttpTransportPort,
    OutputSinkPort,
    TransportError,
};
