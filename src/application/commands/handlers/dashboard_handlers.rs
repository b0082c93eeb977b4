//! Dashboard Command Handlers
//!
//! 先查询天气，成功后向所有接收人群发报告

use std::sync::Arc;

use crate::application::commands::{DashboardOutcome, FetchWeatherCommand, RunDashboardCommand};
use crate::application::ports::{BatchRunnerPort, OutputSinkPort};
use crate::domain::dispatch::TaskSpec;

use super::FetchWeatherHandler;

/// Dashboard Handler
pub struct DashboardHandler {
    lookup: Arc<FetchWeatherHandler>,
    runner: Arc<dyn BatchRunnerPort>,
    output: Arc<dyn OutputSinkPort>,
}

impl DashboardHandler {
    pub fn new(
        lookup: Arc<FetchWeatherHandler>,
        runner: Arc<dyn BatchRunnerPort>,
        output: Arc<dyn OutputSinkPort>,
    ) -> Self {
        Self {
            lookup,
            runner,
            output,
        }
    }

    pub async fn handle(&self, cmd: RunDashboardCommand) -> DashboardOutcome {
        let weather = match self
            .lookup
            .report(FetchWeatherCommand::new(cmd.subject.clone()))
            .await
        {
            Ok(weather) => weather,
            Err(e) => {
                tracing::info!(subject = %cmd.subject, error = %e, "Skipping report dispatch");
                self.output.emit("Weather report not sent.");
                return DashboardOutcome::LookupFailed(e);
            }
        };

        let specs: Vec<TaskSpec> = cmd.recipients.into_iter().map(TaskSpec::from).collect();

        tracing::info!(
            city = %weather.subject_name,
            recipients = specs.len(),
            "Dispatching weather report"
        );

        let report = self.runner.run_batch(specs).await;

        DashboardOutcome::Dispatched { weather, report }
    }
}
