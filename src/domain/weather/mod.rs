//! Weather Context - 天气限界上下文
//!
//! 职责:
//! - 查询请求 / 查询结果值对象
//! - 温度阈值策略与分级错误

mod errors;
mod value_objects;

pub use errors::ClassificationError;
pub use value_objects::{LookupRequest, LookupResult, TemperatureRange};
