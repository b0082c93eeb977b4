//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod decision;
pub mod output;
pub mod transport;

pub use decision::*;
pub use output::*;
pub use transport::*;
