//! Batch Task Runner - 并发执行一批模拟任务
//!
//! 所有任务在同一执行上下文中协作调度（join_all），不使用 tokio::spawn。
//! 等待全部任务结算后按提交顺序组装报告，最后无条件发出完成信号。

use async_trait::async_trait;
use chrono::Utc;
use futures_util::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::application::ports::{BatchRunnerPort, DecisionSourcePort, OutputSinkPort};
use crate::domain::dispatch::{BatchReport, TaskSpec};
use crate::infrastructure::events::EventPublisher;

use super::SimulatedTask;

/// Runner 配置
#[derive(Debug, Clone)]
pub struct BatchRunnerConfig {
    /// 单个任务的最大模拟延迟
    pub max_delay: Duration,
    /// 批次完成后输出的提示
    pub completion_message: String,
}

impl Default for BatchRunnerConfig {
    fn default() -> Self {
        Self {
            max_delay: Duration::from_millis(9000),
            completion_message: "Email process is complete.".to_string(),
        }
    }
}

/// 批量任务执行器
pub struct BatchTaskRunner {
    config: BatchRunnerConfig,
    decisions: Arc<dyn DecisionSourcePort>,
    output: Arc<dyn OutputSinkPort>,
    events: Arc<EventPublisher>,
}

impl BatchTaskRunner {
    pub fn new(
        config: BatchRunnerConfig,
        decisions: Arc<dyn DecisionSourcePort>,
        output: Arc<dyn OutputSinkPort>,
        events: Arc<EventPublisher>,
    ) -> Self {
        Self {
            config,
            decisions,
            output,
            events,
        }
    }

    /// 执行一批任务
    ///
    /// 单个任务失败不会取消其它任务；报告长度等于提交数量
    pub async fn run_batch(&self, specs: Vec<TaskSpec>) -> BatchReport {
        let batch_id = Uuid::new_v4();
        let started_at = Utc::now();

        warn_on_duplicate_ids(batch_id, &specs);

        tracing::info!(batch_id = %batch_id, count = specs.len(), "Batch started");

        let tasks: Vec<SimulatedTask> = specs
            .into_iter()
            .map(|spec| {
                let plan = self.decisions.plan(&spec, self.config.max_delay);
                SimulatedTask::new(spec, plan)
            })
            .collect();

        let events = self.events.as_ref();
        let units = tasks.into_iter().enumerate().map(|(index, task)| async move {
            let outcome = task.run().await;
            tracing::debug!(
                batch_id = %batch_id,
                index = index,
                task_id = %outcome.task_id(),
                status = outcome.status().as_str(),
                "Task settled"
            );
            events.publish_task_settled(batch_id, index, &outcome);
            outcome
        });

        let outcomes = join_all(units).await;
        let report = BatchReport::new(batch_id, outcomes, started_at);

        for outcome in report.outcomes() {
            self.output.emit(outcome.detail());
        }

        self.finish(&report);
        report
    }

    /// 完成信号，与成功数量无关
    fn finish(&self, report: &BatchReport) {
        self.events.publish_batch_completed(report);
        self.output.emit(&self.config.completion_message);

        tracing::info!(
            batch_id = %report.batch_id(),
            total = report.len(),
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Batch completed"
        );
    }
}

#[async_trait]
impl BatchRunnerPort for BatchTaskRunner {
    async fn run_batch(&self, specs: Vec<TaskSpec>) -> BatchReport {
        BatchTaskRunner::run_batch(self, specs).await
    }
}

fn warn_on_duplicate_ids(batch_id: Uuid, specs: &[TaskSpec]) {
    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !seen.insert(spec.id.as_str()) {
            tracing::warn!(batch_id = %batch_id, task_id = %spec.id, "Duplicate task id in batch");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dispatch::{OutcomeStatus, TaskOutcome, TaskPlan, Verdict};
    use crate::infrastructure::adapters::{MemorySink, RandomDecisionSource, ScriptedDecisionSource};
    use crate::infrastructure::events::BatchEvent;
    use tokio::sync::broadcast;

    const DONE: &str = "Email process is complete.";

    fn emails() -> Vec<TaskSpec> {
        [
            "user1@gmail.com",
            "john.doe@yahoo.com",
            "admin@company.com",
            "support@service.in",
            "hello.world@outlook.com",
        ]
        .into_iter()
        .map(TaskSpec::from)
        .collect()
    }

    fn runner(
        decisions: impl DecisionSourcePort + 'static,
        sink: Arc<MemorySink>,
        events: Arc<EventPublisher>,
    ) -> BatchTaskRunner {
        BatchTaskRunner::new(BatchRunnerConfig::default(), Arc::new(decisions), sink, events)
    }

    fn drain(rx: &mut broadcast::Receiver<BatchEvent>) -> Vec<BatchEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn completed_count(events: &[BatchEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, BatchEvent::BatchCompleted { .. }))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_batch_still_completes() {
        let sink = Arc::new(MemorySink::new());
        let events = Arc::new(EventPublisher::new());
        let mut rx = events.subscribe();
        let runner = runner(ScriptedDecisionSource::from_verdicts(Vec::new()), sink.clone(), events);

        let report = runner.run_batch(Vec::new()).await;

        assert!(report.is_empty());
        assert_eq!(sink.lines(), vec![DONE.to_string()]);
        assert_eq!(completed_count(&drain(&mut rx)), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_failed_batch_still_completes() {
        let sink = Arc::new(MemorySink::new());
        let events = Arc::new(EventPublisher::new());
        let mut rx = events.subscribe();
        let decisions = ScriptedDecisionSource::from_verdicts([Verdict::Fail; 5]);
        let runner = runner(decisions, sink.clone(), events);

        let report = runner.run_batch(emails()).await;

        assert_eq!(report.len(), 5);
        assert_eq!(report.failed(), 5);
        assert_eq!(sink.count(DONE), 1);

        let events = drain(&mut rx);
        assert_eq!(completed_count(&events), 1);
        assert!(matches!(
            events.last(),
            Some(BatchEvent::BatchCompleted { total: 5, succeeded: 0, failed: 5, .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_pattern_is_preserved() {
        let sink = Arc::new(MemorySink::new());
        let decisions = ScriptedDecisionSource::from_verdicts([
            Verdict::Succeed,
            Verdict::Fail,
            Verdict::Succeed,
            Verdict::Fail,
            Verdict::Succeed,
        ]);
        let runner = runner(decisions, sink.clone(), Arc::new(EventPublisher::new()));

        let report = runner.run_batch(emails()).await;

        assert_eq!(
            report.statuses(),
            vec![
                OutcomeStatus::Succeeded,
                OutcomeStatus::Failed,
                OutcomeStatus::Succeeded,
                OutcomeStatus::Failed,
                OutcomeStatus::Succeeded,
            ]
        );
        assert_eq!(
            report.outcomes()[1],
            TaskOutcome::failed("john.doe@yahoo.com", "Rejected: john.doe@yahoo.com")
        );
        assert_eq!(
            sink.lines(),
            vec![
                "Accepted: user1@gmail.com".to_string(),
                "Rejected: john.doe@yahoo.com".to_string(),
                "Accepted: admin@company.com".to_string(),
                "Rejected: support@service.in".to_string(),
                "Accepted: hello.world@outlook.com".to_string(),
                DONE.to_string(),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_early_failure_does_not_abort_siblings() {
        let decisions = ScriptedDecisionSource::from_plans([
            TaskPlan::immediate(Verdict::Fail),
            TaskPlan::new(Duration::from_secs(2), Verdict::Succeed),
            TaskPlan::new(Duration::from_secs(4), Verdict::Succeed),
        ]);
        let runner = runner(
            decisions,
            Arc::new(MemorySink::new()),
            Arc::new(EventPublisher::new()),
        );

        let report = runner
            .run_batch(vec!["a".into(), "b".into(), "c".into()])
            .await;

        assert_eq!(report.failed(), 1);
        assert_eq!(report.succeeded(), 2);
        assert!(!report.outcomes()[0].is_success());
        assert!(report.outcomes()[1].is_success());
        assert!(report.outcomes()[2].is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_report_reorders_settlement_to_submission_order() {
        let events = Arc::new(EventPublisher::new());
        let mut rx = events.subscribe();
        let decisions = ScriptedDecisionSource::from_plans([
            TaskPlan::new(Duration::from_millis(300), Verdict::Succeed),
            TaskPlan::new(Duration::from_millis(200), Verdict::Fail),
            TaskPlan::new(Duration::from_millis(100), Verdict::Succeed),
        ]);
        let runner = runner(decisions, Arc::new(MemorySink::new()), events);

        let report = runner
            .run_batch(vec!["a".into(), "b".into(), "c".into()])
            .await;

        let ids: Vec<&str> = report.outcomes().iter().map(|o| o.task_id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let settled: Vec<usize> = drain(&mut rx)
            .into_iter()
            .filter_map(|e| match e {
                BatchEvent::TaskSettled { index, .. } => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(settled, vec![2, 1, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_spec_yields_one_outcome() {
        for n in 0..8 {
            let sink = Arc::new(MemorySink::new());
            let runner = runner(
                RandomDecisionSource::new(0.5),
                sink.clone(),
                Arc::new(EventPublisher::new()),
            );
            let specs: Vec<TaskSpec> = (0..n).map(|i| TaskSpec::new(format!("task-{}", i))).collect();

            let report = runner.run_batch(specs.clone()).await;

            assert_eq!(report.len(), n);
            for (spec, outcome) in specs.iter().zip(report.outcomes()) {
                assert_eq!(outcome.task_id(), spec.id);
            }
            assert_eq!(sink.count(DONE), 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_ids_are_still_reported() {
        let runner = runner(
            ScriptedDecisionSource::from_verdicts([Verdict::Succeed, Verdict::Fail]),
            Arc::new(MemorySink::new()),
            Arc::new(EventPublisher::new()),
        );

        let report = runner.run_batch(vec!["same".into(), "same".into()]).await;

        assert_eq!(report.len(), 2);
        assert_eq!(
            report.statuses(),
            vec![OutcomeStatus::Succeeded, OutcomeStatus::Failed]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_through_port() {
        let runner: Arc<dyn BatchRunnerPort> = Arc::new(runner(
            ScriptedDecisionSource::from_verdicts([Verdict::Succeed]),
            Arc::new(MemorySink::new()),
            Arc::new(EventPublisher::new()),
        ));

        let report = runner.run_batch(vec!["a".into()]).await;
        assert_eq!(report.succeeded(), 1);
    }
}
