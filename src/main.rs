//! Homework Status Monitor CLI
//!
//! 轮询作业评审状态，状态变化时向 Telegram 推送通知

use anyhow::Result;
use clap::Parser;
use homework_status_monitor::{
    ApiClient, Config, Notifier, StatusWatcher, TelegramChannel, TelegramConfig,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "hsm")]
#[command(about = "Homework Status Monitor - 轮询作业评审状态并推送 Telegram 通知")]
#[command(version)]
struct Cli {
    /// 轮询间隔（秒）
    #[arg(long, short, default_value = "600")]
    interval: u64,
    /// 单轮失败后终止进程（默认持续重试）
    #[arg(long)]
    halt_on_error: bool,
    /// Dry-run 模式（只打印不发送）
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化 tracing 日志系统
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug hsm --interval 60
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("homework_status_monitor=info,hsm=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    info!("Checking required environment variables");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // 缺失密钥是整个系统唯一的硬停止
            error!(error = %e, "Missing required configuration, exiting");
            std::process::exit(1);
        }
    };

    let api = ApiClient::new(&config.endpoint, &config.practicum_token)?;
    let channel = TelegramChannel::new(TelegramConfig::new(
        &config.telegram_token,
        &config.telegram_chat_id,
    ))?;
    let notifier = Notifier::new(Box::new(channel)).with_dry_run(cli.dry_run);

    let mut watcher = StatusWatcher::new(Box::new(api), notifier, cli.interval)
        .with_halt_on_error(cli.halt_on_error);

    watcher.watch().await
}
