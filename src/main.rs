//! Weatherdash - 天气看板
//!
//! 子命令:
//! - lookup: 查询并分级当前天气
//! - batch: 模拟群发邮件
//! - dashboard: 查询成功后群发天气报告

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use weatherdash::application::{
    DashboardHandler, FetchWeatherCommand, FetchWeatherHandler, OutputSinkPort,
    RunDashboardCommand,
};
use weatherdash::config::{load_config_from_path, print_config, LogConfig};
use weatherdash::domain::dispatch::TaskSpec;
use weatherdash::infrastructure::adapters::{
    ConsoleSink, RandomDecisionSource, ReqwestTransport, ReqwestTransportConfig,
};
use weatherdash::infrastructure::{BatchTaskRunner, EventPublisher};

/// Weatherdash - 天气看板与批量报告发送
#[derive(Parser)]
#[command(name = "weatherdash")]
#[command(about = "Weather lookup with threshold alerts and simulated bulk dispatch", long_about = None)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and classify the current weather for a city
    Lookup {
        /// City name
        city: String,
    },

    /// Send simulated emails concurrently (defaults to configured recipients)
    Batch {
        /// Recipient addresses
        ids: Vec<String>,
    },

    /// Fetch the weather, then email the report to configured recipients
    Dashboard {
        /// City name
        city: String,
    },
}

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},weatherdash={}", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// 天气查询失败时的退出码
const EXIT_LOOKUP_FAILED: u8 = 2;

fn exit_status(lookup_ok: bool) -> u8 {
    if lookup_ok {
        0
    } else {
        EXIT_LOOKUP_FAILED
    }
}

// 批量任务在单线程上协作调度
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);
    print_config(&config);

    if config.weather.api_key.is_empty() {
        tracing::warn!("No API key configured, set WEATHERDASH_WEATHER__API_KEY");
    }

    let output: Arc<dyn OutputSinkPort> = Arc::new(ConsoleSink::new());

    let transport = Arc::new(ReqwestTransport::new(
        ReqwestTransportConfig::default().with_timeout(config.weather.timeout_secs),
    )?);
    let lookup = Arc::new(FetchWeatherHandler::new(
        config
            .fetch_weather_config()
            .map_err(|e| anyhow::anyhow!("Invalid thresholds: {}", e))?,
        transport,
        output.clone(),
    ));

    let events = Arc::new(EventPublisher::new());
    let runner = Arc::new(BatchTaskRunner::new(
        config.batch.runner_config(),
        Arc::new(RandomDecisionSource::new(config.batch.success_probability)),
        output.clone(),
        events,
    ));

    let lookup_ok = match cli.command {
        Commands::Lookup { city } => match lookup.report(FetchWeatherCommand::new(city)).await {
            Ok(weather) => {
                tracing::debug!(city = %weather.subject_name, temp = weather.metric_value, "Lookup finished");
                true
            }
            Err(e) => {
                tracing::debug!(kind = e.name(), "Lookup finished with error");
                false
            }
        },
        Commands::Batch { ids } => {
            let ids = if ids.is_empty() {
                config.batch.recipients.clone()
            } else {
                ids
            };
            let report = runner
                .run_batch(ids.into_iter().map(TaskSpec::from).collect())
                .await;
            tracing::debug!(succeeded = report.succeeded(), failed = report.failed(), "Batch finished");
            true
        }
        Commands::Dashboard { city } => {
            let dashboard = DashboardHandler::new(lookup, runner, output);
            dashboard
                .handle(RunDashboardCommand {
                    subject: city,
                    recipients: config.batch.recipients.clone(),
                })
                .await
                .is_dispatched()
        }
    };

    Ok(ExitCode::from(exit_status(lookup_ok)))
}
