//! Logging initialization.
//!
//! - **RUST_LOG**: level filter, e.g. `info`, `serve=debug,tower_http=debug`. Default: `info`.
//! - **LOG_FILE**: when set, logs are appended to this file as plain text with span ids.
//!
//! The server logs to stderr as well. Client commands never log to the console so stdout
//! carries only their output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Console {
    /// `promptmaster serve`
    Stderr,
    /// Client subcommands.
    Off,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hyper_util=off"))
}

pub fn init(console: Console) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match std::env::var("LOG_FILE") {
        Ok(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(crate::log_format::TextWithSpanIds::new())
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(filter()),
            )
        }
        Err(_) => None,
    };
    let console_layer = match console {
        Console::Stderr => Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter()),
        ),
        Console::Off => None,
    };
    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()?;
    if let Ok(path) = std::env::var("LOG_FILE") {
        tracing::info!(path = %path, "promptmaster logging to file");
    }
    Ok(())
}
