/// Default filter when `RUST_LOG` is unset; warnings only, so stderr stays quiet
pub const DEFAULT_FILTER: &str = "collection2k6=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("RUST_LOG").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }

    fn from_values(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match format.as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self { filter, format }
    }
}
