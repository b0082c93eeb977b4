//! Dashboard Commands - 查询天气后群发报告

use crate::application::error::LookupError;
use crate::domain::dispatch::BatchReport;
use crate::domain::weather::LookupResult;

/// 天气看板命令
#[derive(Debug, Clone)]
pub struct RunDashboardCommand {
    pub subject: String,
    /// 报告接收人，每个地址对应一个发送任务
    pub recipients: Vec<String>,
}

/// 天气看板结果
#[derive(Debug, Clone)]
pub enum DashboardOutcome {
    /// 查询失败，未发送报告
    LookupFailed(LookupError),
    /// 查询成功，报告已群发
    Dispatched {
        weather: LookupResult,
        report: BatchReport,
    },
}

impl DashboardOutcome {
    /// 报告是否已群发
    pub fn is_dispatched(&self) -> bool {
        matches!(self, DashboardOutcome::Dispatched { .. })
    }
}
