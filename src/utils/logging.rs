// Logging setup
//
// Console output is filtered by RUST_LOG, or by the configured Discord log
// level when RUST_LOG is unset. Status update failures also go to a log file.

use std::env;
use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, Targets};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::utils::config::LogLevel;

/// Events logged with this target are written to the status error log file
pub const STATUS_LOG_TARGET: &str = "status_log";

/// Console filter directives for a configured level.
///
/// The level applies to serenity and poise; the bot's own events stay at info.
pub fn default_directives(level: LogLevel) -> String {
    let level = level.as_directive();
    format!(
        "discord_status=info,{}=error,serenity={},poise={}",
        STATUS_LOG_TARGET, level, level
    )
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered file output is lost.
pub fn init(level: LogLevel, log_file: &Path) -> WorkerGuard {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "DiscordStatus.log".into());

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::new(
        env::var("RUST_LOG").unwrap_or_else(|_| default_directives(level)),
    );

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(non_blocking)
        .with_filter(Targets::new().with_target(STATUS_LOG_TARGET, Level::ERROR));

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(env_filter))
        .with(file_layer)
        .init();

    guard
}
