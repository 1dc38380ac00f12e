//! Logging Infrastructure
//!
//! Structured logging setup. Level comes from `RUST_LOG` (default `info`);
//! set `LOG_DIR` to additionally write daily-rolling files.

use tracing_subscriber::EnvFilter;

/// Initialize the logger from the environment
pub fn init_logger() {
    init_logger_with_file(std::env::var("LOG_DIR").ok().as_deref());
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let path = std::path::Path::new(dir);
        if path.exists() {
            let file_appender = tracing_appender::rolling::daily(dir, "aruvi-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
