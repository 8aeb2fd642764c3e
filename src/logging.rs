//! `tracing` setup for the binary.
//!
//! Events go to stderr so stdout only carries the final status line.
//!
//! - `WEBPAGE2PDF_LOG` or `RUST_LOG`: filter directive (e.g. `webpage2pdf=debug`)
//! - `WEBPAGE2PDF_LOG_FORMAT`: `compact` (default), `pretty` or `json`

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "webpage2pdf=info,warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse from string (case-insensitive), unknown values fall back to compact.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        let filter = std::env::var("WEBPAGE2PDF_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        let format = std::env::var("WEBPAGE2PDF_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or_default();

        Self { filter, format }
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(config: LogConfig) {
    let env_filter = EnvFilter::try_new(&config.filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    let _ = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("whatever"), LogFormat::Compact);
    }

    #[test]
    fn default_config() {
        let config = LogConfig::default();
        assert_eq!(config.filter, "webpage2pdf=info,warn");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(LogConfig::default());
        init(LogConfig { filter: "not a [valid filter".to_string(), format: LogFormat::Json });
    }
}
