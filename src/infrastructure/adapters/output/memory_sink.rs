//! Memory Sink - 记录所有输出行，供测试断言

use std::sync::Mutex;

use crate::application::ports::OutputSinkPort;

#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// 与 `line` 完全相同的行数
    pub fn count(&self, line: &str) -> usize {
        self.lines
            .lock()
            .map(|l| l.iter().filter(|l| l.as_str() == line).count())
            .unwrap_or(0)
    }
}

impl OutputSinkPort for MemorySink {
    fn emit(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
