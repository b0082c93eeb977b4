//! Decision Adapter - 任务计划来源

mod random_decision;
mod scripted_decision;

pub use random_decision::RandomDecisionSource;
pub use scripted_decision::ScriptedDecisionSource;
