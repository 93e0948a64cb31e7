//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so diagnostics never land in the
/// middle of the interactive display. Set `PORTLINE_LOG` to a file
/// path to enable it; `RUST_LOG` filters as usual (default `info`).
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("PORTLINE_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {}", log_path);
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
