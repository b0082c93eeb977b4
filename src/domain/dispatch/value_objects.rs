//! Dispatch Context - Value Objects

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 批次中的单个任务
///
/// id 在同一批次内应唯一，报告按 id 标记结果
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: String,
}

impl TaskSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&str> for TaskSpec {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskSpec {
    fn from(id: String) -> Self {
        Self { id }
    }
}

/// 模拟任务的最终走向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Succeed,
    Fail,
}

/// 单个任务的执行计划
///
/// 延迟与成败在任务构造前确定，任务本身不读取任何全局随机源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskPlan {
    pub delay: Duration,
    pub verdict: Verdict,
}

impl TaskPlan {
    pub fn new(delay: Duration, verdict: Verdict) -> Self {
        Self { delay, verdict }
    }

    pub fn immediate(verdict: Verdict) -> Self {
        Self::new(Duration::ZERO, verdict)
    }
}
