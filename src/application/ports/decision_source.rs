//! Decision Source Port - 模拟任务的延迟与成败来源
//!
//! 生产环境使用随机实现，测试时替换为确定性序列

use std::time::Duration;

use crate::domain::dispatch::{TaskPlan, TaskSpec};

pub trait DecisionSourcePort: Send + Sync {
    /// 为单个任务生成执行计划，延迟不超过 `max_delay`
    fn plan(&self, task: &TaskSpec, max_delay: Duration) -> TaskPlan;
}
