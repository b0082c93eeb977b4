//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Weather Context: 天气查询结果与温度分级
//! - Dispatch Context: 批量发送任务、执行计划与结果汇总

pub mod dispatch;
pub mod weather;
