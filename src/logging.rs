use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "guessing-game.log";

/// 获取日志目录路径 (~/.local/share/guessing-game/logs/)
fn log_dir() -> io::Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate data directory"))?
        .join("guessing-game")
        .join("logs");

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

/// 初始化文件日志
///
/// 终端被 TUI 占用，日志只写文件。返回的 guard 必须存活到程序结束
pub fn init(level: &str) -> io::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(log_dir()?, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(guard)
}
