use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for the interactive browser.
pub const LOG_FILE_ENV: &str = "FAVREEL_LOG";

/// Where log output may go without corrupting the user's screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Full-screen UI: file only, and only when `FAVREEL_LOG` is set.
    Tui,
    /// One-shot commands: stderr.
    Cli,
}

/// Initialize tracing for `mode`.
///
/// The filter comes from `RUST_LOG`, defaulting to `info` for files and
/// `warn` for stderr.
pub fn init_tracing(mode: LogMode) {
    match mode {
        LogMode::Tui => init_file_logging(),
        LogMode::Cli => {
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
    }
}

/// Log files get unique names so concurrent instances do not clobber each
/// other: `{path}.{timestamp}.{pid}`.
fn init_file_logging() {
    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
