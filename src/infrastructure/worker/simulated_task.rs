//! Simulated Task - 模拟一次可变延迟的发送操作

use crate::domain::dispatch::{TaskOutcome, TaskPlan, TaskSpec, Verdict};

/// 模拟任务
///
/// 延迟与成败由构造时传入的计划决定
#[derive(Debug, Clone)]
pub struct SimulatedTask {
    spec: TaskSpec,
    plan: TaskPlan,
}

impl SimulatedTask {
    pub fn new(spec: TaskSpec, plan: TaskPlan) -> Self {
        Self { spec, plan }
    }

    /// 执行任务
    ///
    /// 首次 poll 总是让出调度，零延迟任务也不会在兄弟任务启动前结算
    pub async fn run(self) -> TaskOutcome {
        tokio::task::yield_now().await;
        tokio::time::sleep(self.plan.delay).await;

        match self.plan.verdict {
            Verdict::Succeed => {
                let value = format!("Accepted: {}", self.spec.id);
                TaskOutcome::succeeded(self.spec.id, value)
            }
            Verdict::Fail => {
                let reason = format!("Rejected: {}", self.spec.id);
                TaskOutcome::failed(self.spec.id, reason)
            }
        }
    }
}
