//! Tracing subscriber initialisation.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    #[display("pretty")]
    Pretty,
    /// One JSON object per event
    #[display("json")]
    Json,
}

impl LogFormat {
    /// Parses a format name, falling back to [`LogFormat::Pretty`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise `default_directive`
/// (e.g. `"info"`). Calling this more than once is harmless: later calls
/// report an error string and leave the first subscriber in place.
pub fn init_tracing(default_directive: &str, format: LogFormat) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let result = match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
    };

    result.map_err(|e| format!("Failed to install tracing subscriber: {}", e))?;
    info!(format = %format, "Tracing initialized");
    Ok(())
}
