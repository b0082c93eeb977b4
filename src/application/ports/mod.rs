//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod batch_runner;
mod decision_source;
mod http_transport;
mod output_sink;

pub use batch_runner::BatchRunnerPort;
pub use decision_source::DecisionSourcePort;
pub use http_transport::{HttpResponsePort, HttpTransportPort, TransportError};
pub use output_sink::OutputSinkPort;
