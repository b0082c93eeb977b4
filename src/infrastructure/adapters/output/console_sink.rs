//! Console Sink - 输出到标准输出

use crate::application::ports::OutputSinkPort;

#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSinkPort for ConsoleSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}
