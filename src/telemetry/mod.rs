mod config;

pub use config::{LogFormat, TelemetryConfig};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Logs go to stderr because stdout
/// carries the generated script.
pub fn init_telemetry() {
    let config = TelemetryConfig::from_env();

    let env_filter = EnvFilter::try_new(&config.filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }

    tracing::debug!(filter = %config.filter, "Tracing initialized");
}
