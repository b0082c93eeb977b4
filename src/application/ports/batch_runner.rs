//! Batch Runner Port - 批量任务执行抽象

use async_trait::async_trait;

use crate::domain::dispatch::{BatchReport, TaskSpec};

/// Batch Runner Port
///
/// 批次调用本身没有失败路径，单个任务失败以 `TaskOutcome::Failed` 记录在报告中
#[async_trait]
pub trait BatchRunnerPort: Send + Sync {
    async fn run_batch(&self, specs: Vec<TaskSpec>) -> BatchReport;
}
