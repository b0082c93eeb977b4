//! Worker Layer - Batch Task Processing
//!
//! 实现 BatchTaskRunner，并发执行模拟发送任务并汇总结果

mod batch_runner;
mod simulated_task;

pub use batch_runner::{BatchRunnerConfig, BatchTaskRunner};
pub use simulated_task::SimulatedTask;
