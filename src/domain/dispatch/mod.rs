//! Dispatch Context - 批量发送限界上下文
//!
//! 职责:
//! - 任务描述与执行计划
//! - 单任务结果与批次报告

mod report;
mod value_objects;

pub use report::{BatchReport, OutcomeStatus, TaskOutcome};
pub use value_objects::{TaskPlan, TaskSpec, Verdict};
