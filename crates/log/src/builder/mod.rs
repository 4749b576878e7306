//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger alive
///
/// Holds the root span entered for [`Config::service`]; drop it at the end
/// of `main`.
#[derive(Debug)]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

/// Apply the display toggles to a fmt layer and install it over the filter.
/// `without_time` changes the layer type, hence the two arms.
macro_rules! init_fmt_layer {
    ($filter:expr, $layer:expr, $display:expr) => {{
        let display = $display;
        let layer = $layer
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_level(display.level)
            .with_thread_ids(display.thread_ids)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_writer(std::io::stderr);
        if display.time {
            Registry::default().with($filter).with(layer).try_init()
        } else {
            Registry::default()
                .with($filter)
                .with(layer.without_time())
                .try_init()
        }
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The `EnvFilter` for the configured level
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("'{}': {e}", self.config.level)))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let display = &self.config.display;

        let installed = match self.config.format {
            Format::Pretty => init_fmt_layer!(filter, fmt::layer().pretty(), display),
            Format::Compact => init_fmt_layer!(filter, fmt::layer().compact(), display),
            Format::Json => init_fmt_layer!(
                filter,
                fmt::layer().json().flatten_event(display.flatten),
                display
            ),
        };
        installed.map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        tracing::debug!(level = %self.config.level, format = %self.config.format, "logger installed");
        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filters() {
        for level in ["warn", "rill_coerce=debug,info", "trace", ""] {
            let builder = LoggerBuilder::from_config(Config {
                level: level.to_string(),
                ..Config::default()
            });
            assert!(builder.filter().is_ok(), "{level}");
        }
    }

    #[test]
    fn test_invalid_filter_fails_before_install() {
        let err = LoggerBuilder::from_config(Config {
            level: "rill=loud".to_string(),
            ..Config::default()
        })
        .build()
        .unwrap_err();
        assert!(matches!(err, LogError::Filter(ref msg) if msg.contains("rill=loud")));
    }
}
