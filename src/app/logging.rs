//! Usage: tracing subscriber setup (stderr + daily rolling file under the app log dir).

use crate::error::{AppError, AppResult};
use std::path::Path;
use std::sync::Mutex;
use tauri::{AppHandle, Manager, Runtime};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "resident-clock";
const MAX_LOG_FILES: usize = 7;

/// Keeps the non-blocking file writer flushing for the life of the app.
pub(crate) struct LogGuard(#[allow(dead_code)] Mutex<WorkerGuard>);

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn file_appender(dir: &Path) -> AppResult<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .map_err(|e| AppError::Logging(e.to_string()))
}

pub(crate) fn init<R: Runtime>(app: &AppHandle<R>) {
    let appender = app
        .path()
        .app_log_dir()
        .map_err(|e| AppError::Logging(e.to_string()))
        .and_then(|dir| file_appender(&dir).map(|appender| (dir, appender)));

    let (file_layer, guard, file_error, log_dir) = match appender {
        Ok((dir, appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard), None, Some(dir))
        }
        Err(err) => (None, None, Some(err), None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer);

    if !install_global(subscriber) {
        return;
    }

    if let Some(guard) = guard {
        app.manage(LogGuard(Mutex::new(guard)));
    }

    match (log_dir, file_error) {
        (Some(dir), _) => tracing::info!(dir = %dir.display(), "日志初始化完成"),
        (None, Some(err)) => tracing::warn!("文件日志不可用，仅输出到控制台: {}", err),
        (None, None) => {}
    }
}

/// Install `subscriber` process-wide and bridge `log` records into it.
///
/// Returns `false` (after warning through whichever subscriber is current) if
/// a global subscriber already exists.
fn install_global<S>(subscriber: S) -> bool
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("全局日志订阅器已存在，跳过日志初始化（文件日志不可用）");
        return false;
    }
    let _ = tracing_log::LogTracer::init();
    true
}

/// Console-only subscriber for failures before `init` could run.
pub(crate) fn init_fallback() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
