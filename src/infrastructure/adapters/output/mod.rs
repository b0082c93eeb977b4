//! Output Adapter - 文本输出实现

mod console_sink;
mod memory_sink;

pub use console_sink::ConsoleSink;
pub use memory_sink::MemorySink;
