//! Weatherdash - 天气看板与批量报告发送
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Weather Context: 查询结果、温度阈值分级
//! - Dispatch Context: 任务计划、单任务结果、批次报告
//!
//! 应用层 (application/):
//! - Ports: 端口定义（HttpTransport, DecisionSource, OutputSink, BatchRunner）
//! - Commands: 天气查询、看板编排
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: reqwest / stub 传输、随机 / 脚本化计划来源、控制台 / 内存输出
//! - Worker: BatchTaskRunner 协作式并发执行
//! - Events: 批次事件广播

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
