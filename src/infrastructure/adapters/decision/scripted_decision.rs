//! Scripted Decision Source - 按固定顺序返回计划
//!
//! 用于测试：计划按调用顺序依次取出，用尽后返回 fallback

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::application::ports::DecisionSourcePort;
use crate::domain::dispatch::{TaskPlan, TaskSpec, Verdict};

pub struct ScriptedDecisionSource {
    plans: Mutex<VecDeque<TaskPlan>>,
    fallback: TaskPlan,
}

impl ScriptedDecisionSource {
    pub fn from_plans(plans: impl IntoIterator<Item = TaskPlan>) -> Self {
        Self {
            plans: Mutex::new(plans.into_iter().collect()),
            fallback: TaskPlan::immediate(Verdict::Succeed),
        }
    }

    /// 所有任务零延迟，只指定成败
    pub fn from_verdicts(verdicts: impl IntoIterator<Item = Verdict>) -> Self {
        Self::from_plans(verdicts.into_iter().map(TaskPlan::immediate))
    }

    pub fn with_fallback(mut self, fallback: TaskPlan) -> Self {
        self.fallback = fallback;
        self
    }

    /// 尚未取出的计划数
    pub fn remaining(&self) -> usize {
        self.plans.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl DecisionSourcePort for ScriptedDecisionSource {
    fn plan(&self, _task: &TaskSpec, max_delay: Duration) -> TaskPlan {
        let next = self
            .plans
            .lock()
            .ok()
            .and_then(|mut plans| plans.pop_front())
            .unwrap_or(self.fallback);

        TaskPlan::new(next.delay.min(max_delay), next.verdict)
    }
}
