//! Events - 批次事件发布

mod publisher;

pub use publisher::{BatchEvent, EventPublisher};
