//! Transport Adapter - HTTP GET 实现

mod reqwest_transport;
mod stub_transport;

pub use reqwest_transport::{ReqwestTransport, ReqwestTransportConfig};
pub use stub_transport::StubTransport;
