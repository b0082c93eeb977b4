//! Event Publisher Implementation
//!
//! 批次事件广播：任务结算（按结算顺序）与批次完成

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::dispatch::{BatchReport, TaskOutcome};

/// 批次事件类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum BatchEvent {
    /// 单个任务结算
    TaskSettled {
        batch_id: Uuid,
        /// 提交顺序中的位置
        index: usize,
        outcome: TaskOutcome,
    },
    /// 批次完成（每个批次恰好一次）
    BatchCompleted {
        batch_id: Uuid,
        total: usize,
        succeeded: usize,
        failed: usize,
    },
}

/// 事件发布器
pub struct EventPublisher {
    channel: broadcast::Sender<BatchEvent>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { channel: tx }
    }

    /// 订阅批次事件
    pub fn subscribe(&self) -> broadcast::Receiver<BatchEvent> {
        self.channel.subscribe()
    }

    /// 发布任务结算事件
    pub fn publish_task_settled(&self, batch_id: Uuid, index: usize, outcome: &TaskOutcome) {
        self.publish(BatchEvent::TaskSettled {
            batch_id,
            index,
            outcome: outcome.clone(),
        });
    }

    /// 发布批次完成事件
    pub fn publish_batch_completed(&self, report: &BatchReport) {
        self.publish(BatchEvent::BatchCompleted {
            batch_id: report.batch_id(),
            total: report.len(),
            succeeded: report.succeeded(),
            failed: report.failed(),
        });
    }

    fn publish(&self, event: BatchEvent) {
        if let Err(e) = self.channel.send(event) {
            tracing::debug!(error = %e, "Failed to publish batch event (no receivers)");
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_subscriber_receives_events() {
        let publisher = EventPublisher::new();
        let mut rx = publisher.subscribe();
        let batch_id = Uuid::new_v4();

        let outcome = TaskOutcome::succeeded("a", "Accepted: a");
        publisher.publish_task_settled(batch_id, 0, &outcome);
        publisher.publish_batch_completed(&BatchReport::new(batch_id, vec![outcome.clone()], Utc::now()));

        assert_eq!(
            rx.recv().await.unwrap(),
            BatchEvent::TaskSettled {
                batch_id,
                index: 0,
                outcome
            }
        );
        assert!(matches!(
            rx.recv().await.unwrap(),
            BatchEvent::BatchCompleted { total: 1, succeeded: 1, failed: 0, .. }
        ));
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let publisher = EventPublisher::new();
        publisher.publish_task_settled(Uuid::new_v4(), 0, &TaskOutcome::failed("a", "Rejected: a"));
    }

    #[test]
    fn test_event_json_shape() {
        let event = BatchEvent::BatchCompleted {
            batch_id: Uuid::nil(),
            total: 0,
            succeeded: 0,
            failed: 0,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "BatchCompleted");
        assert_eq!(json["data"]["total"], 0);
    }
}
