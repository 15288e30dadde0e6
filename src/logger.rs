use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, fmt};

use trafficgen::error::AppResult;

/// Installs the global subscriber: stdout always, plus `log_file` when given.
///
/// The filter comes from `TRAFFICGEN_LOG`, then `RUST_LOG`, then `verbose`.
///
/// # Errors
///
/// Returns an error when the log file cannot be opened.
pub fn init_logging(verbose: bool, log_file: Option<&str>) -> AppResult<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let subscriber = tracing_subscriber::registry()
        .with(resolve_filter(verbose))
        .with(fmt::layer())
        .with(file_layer);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
    Ok(())
}

fn resolve_filter(verbose: bool) -> EnvFilter {
    std::env::var("TRAFFICGEN_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        )
}
