//! 应用层 - 命令
//!
//! 天气查询与看板编排

mod dashboard_commands;
mod weather_commands;

pub mod handlers;

pub use dashboard_commands::*;
pub use weather_commands::*;
