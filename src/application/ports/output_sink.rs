//! Output Sink Port - 面向用户的文本输出
//!
//! 控制台或 UI，仅作为副作用，不属于数据契约

pub trait OutputSinkPort: Send + Sync {
    fn emit(&self, line: &str);
}
