//! Tracing subscriber setup used by the bot.

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::NonBlocking,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

/// Guard to ensure buffered logs are flushed on shutdown.
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(true)
        .with_level(true);

    let Ok(dir) = env::var("LOG_DIR") else {
        builder.init();
        tracing::info!("logger initialized");
        return;
    };

    match init_file_writer(&dir) {
        Ok(file_writer) => {
            let stdout = std::io::stdout.with_max_level(tracing::Level::INFO);
            builder.with_writer(stdout.and(file_writer)).init();
            tracing::info!(log_dir = %dir, "logger initialized");
        }
        Err(e) => {
            builder.init();
            tracing::warn!(error = %e, log_dir = %dir, "could not open log directory, logging to stdout only");
        }
    }
}

fn init_file_writer(dir: &str) -> Result<NonBlocking, InitError> {
    let max_files = env::var("LOG_MAX_FILES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok());

    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("finelame.log");

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = file_builder.build(dir)?;

    let (file_writer, guard) = non_blocking(file_appender);

    // `init` runs once per process, a second guard would only be dropped.
    let _ = LOG_GUARD.set(guard);

    Ok(file_writer)
}
