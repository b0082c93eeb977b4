//! Dispatch Context - Outcomes & Report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Succeeded,
    Failed,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Succeeded => "succeeded",
            OutcomeStatus::Failed => "failed",
        }
    }
}

/// 单个任务的终态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskOutcome {
    Succeeded { task_id: String, value: String },
    Failed { task_id: String, reason: String },
}

impl TaskOutcome {
    pub fn succeeded(task_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Succeeded {
            task_id: task_id.into(),
            value: value.into(),
        }
    }

    pub fn failed(task_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            task_id: task_id.into(),
            reason: reason.into(),
        }
    }

    pub fn task_id(&self) -> &str {
        match self {
            TaskOutcome::Succeeded { task_id, .. } => task_id,
            TaskOutcome::Failed { task_id, .. } => task_id,
        }
    }

    pub fn status(&self) -> OutcomeStatus {
        match self {
            TaskOutcome::Succeeded { .. } => OutcomeStatus::Succeeded,
            TaskOutcome::Failed { .. } => OutcomeStatus::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Succeeded { .. })
    }

    /// 成功值或失败原因
    pub fn detail(&self) -> &str {
        match self {
            TaskOutcome::Succeeded { value, .. } => value,
            TaskOutcome::Failed { reason, .. } => reason,
        }
    }
}

/// 批次报告
///
/// 不变量:
/// - outcomes 顺序与提交顺序一致
/// - 每个提交的任务恰好对应一个结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    batch_id: Uuid,
    outcomes: Vec<TaskOutcome>,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn new(batch_id: Uuid, outcomes: Vec<TaskOutcome>, started_at: DateTime<Utc>) -> Self {
        Self {
            batch_id,
            outcomes,
            started_at,
            finished_at: Utc::now(),
        }
    }

    // Getters
    pub fn batch_id(&self) -> Uuid {
        self.batch_id
    }

    pub fn outcomes(&self) -> &[TaskOutcome] {
        &self.outcomes
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    pub fn statuses(&self) -> Vec<OutcomeStatus> {
        self.outcomes.iter().map(TaskOutcome::status).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let report = BatchReport::new(
            Uuid::new_v4(),
            vec![
                TaskOutcome::succeeded("a", "Accepted: a"),
                TaskOutcome::failed("b", "Rejected: b"),
                TaskOutcome::succeeded("c", "Accepted: c"),
            ],
            Utc::now(),
        );

        assert_eq!(report.len(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(report.finished_at() >= report.started_at());
        assert_eq!(
            report.statuses(),
            vec![
                OutcomeStatus::Succeeded,
                OutcomeStatus::Failed,
                OutcomeStatus::Succeeded
            ]
        );
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = TaskOutcome::failed("user1@gmail.com", "Rejected: user1@gmail.com");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["status"], "failed");
        assert_eq!(json["task_id"], "user1@gmail.com");
        assert_eq!(json["reason"], "Rejected: user1@gmail.com");
    }
}
