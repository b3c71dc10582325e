//! EchoChamber binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use echochamber::{app, args, theme};

/// Log timestamp format: local time, second precision.
struct EchoTimer;

impl tracing_subscriber::fmt::time::FormatTime for EchoTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, preferring the log file and falling back to stderr.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is not set
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("echochamber.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(EchoTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(EchoTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let opts = args::run_options(&cli, theme::settings());
    tracing::info!(
        api = %opts.settings.api_base_url,
        search = ?opts.initial_query,
        "EchoChamber starting"
    );
    if let Err(err) = app::run(opts).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("EchoChamber exited");
}

#[cfg(test)]
mod tests {
    /// What: `FormatTime` impl writes a timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer holds a `YYYY-MM-DDTHH:MM:SS` stamp
    #[test]
    fn echo_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::EchoTimer;
        let _ = t.format_time(&mut writer);
        assert_eq!(buf.len(), 19, "{buf}");
        assert_eq!(&buf[10..11], "T");
    }
}
