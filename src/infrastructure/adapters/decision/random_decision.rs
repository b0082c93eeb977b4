//! Random Decision Source
//!
//! 延迟在 `[0, max_delay]` 内均匀分布，按成功概率抛硬币决定成败

use rand::Rng;
use std::time::Duration;

use crate::application::ports::DecisionSourcePort;
use crate::domain::dispatch::{TaskPlan, TaskSpec, Verdict};

pub struct RandomDecisionSource {
    success_probability: f64,
}

impl RandomDecisionSource {
    /// 概率会被限制在 `[0, 1]`
    pub fn new(success_probability: f64) -> Self {
        let success_probability = if success_probability.is_nan() {
            0.0
        } else {
            success_probability.clamp(0.0, 1.0)
        };
        Self {
            success_probability,
        }
    }

    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }
}

impl Default for RandomDecisionSource {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl DecisionSourcePort for RandomDecisionSource {
    fn plan(&self, task: &TaskSpec, max_delay: Duration) -> TaskPlan {
        let mut rng = rand::thread_rng();

        let max_ms = u64::try_from(max_delay.as_millis()).unwrap_or(u64::MAX);
        let delay = Duration::from_millis(rng.gen_range(0..=max_ms));
        let verdict = if rng.gen_bool(self.success_probability) {
            Verdict::Succeed
        } else {
            Verdict::Fail
        };

        tracing::trace!(task_id = %task.id, delay_ms = delay.as_millis() as u64, ?verdict, "Task planned");

        TaskPlan::new(delay, verdict)
    }
}
