//! pkgshelf binary entrypoint kept minimal. The browser lives in the library.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use pkgshelf::{app, args, settings};

struct ShelfTimer;

impl tracing_subscriber::fmt::time::FormatTime for ShelfTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
/// - `to_file`: Write to the log file instead of stderr
///
/// Details:
/// - The interactive browser logs to `pkgshelf.log` so output never draws over
///   the terminal UI; falls back to stderr when the file cannot be opened.
fn init_logging(level: &str, to_file: bool) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    if to_file {
        let log_path = settings::logs_dir().join("pkgshelf.log");
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
                    .with_timer(ShelfTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
                return;
            }
            Err(e) => {
                eprintln!("failed to open {}: {e}; logging to stderr", log_path.display());
            }
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(ShelfTimer)
        .init();
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    let settings = settings::load_settings(args.config_dir.as_deref());
    let level = args::determine_log_level(&args, &settings);

    init_logging(&level, !args.is_headless());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pkgshelf starting");

    if let Some(code) = args::process_args(&args, &settings).await {
        std::process::exit(code);
    }

    let source = match args::resolve_data_source(&args, &settings) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };
    if let Err(err) = app::run(source, args.query.clone(), args.letter).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("pkgshelf: {err}");
        std::process::exit(1);
    }
    tracing::info!("pkgshelf exited");
}
