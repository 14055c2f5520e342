//! 启动前预处理
//!
//! 外部表现层在进程启动时调用：先 init_logging，再
//! create_startup_context 拿到存储句柄。

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::{self, Storage};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化日志
///
/// 返回的 guard 必须持有到进程结束，否则缓冲中的日志会丢失。
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let config = AppConfig::get();

    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    guard
}

/// 创建启动上下文：加载 .env，连接存储并运行迁移
pub async fn create_startup_context() -> Result<StartupContext> {
    dotenv::dotenv().ok();

    let storage = storage::create_storage().await?;

    let config = AppConfig::get();
    info!(
        "{} 启动完成 (environment: {})",
        config.app.system_name, config.app.environment
    );

    Ok(StartupContext { storage })
}
