//! Logger configuration

mod presets;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Primary level filter variable
pub const ENV_LOG: &str = "RILL_LOG";

/// Output format variable
pub const ENV_LOG_FORMAT: &str = "RILL_LOG_FORMAT";

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directives, e.g. `warn` or `rill_coerce=debug`
    pub level: String,
    /// Line format
    pub format: Format,
    /// What each line shows
    pub display: DisplayConfig,
    /// Service name recorded on a root span, if any
    pub service: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: Format::default(),
            display: DisplayConfig::default(),
            service: None,
        }
    }
}

/// Line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Multi-line, human oriented
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

impl Format {
    /// Lowercase name, as accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(LogError::Config(format!("unknown format '{other}'"))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-line display toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayConfig {
    pub time: bool,
    pub target: bool,
    pub level: bool,
    pub thread_ids: bool,
    /// File and line of the call site
    pub source: bool,
    pub colors: bool,
    /// JSON only: put event fields at the top level
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            target: true,
            level: true,
            thread_ids: false,
            source: false,
            colors: true,
            flatten: false,
        }
    }
}

impl DisplayConfig {
    /// Apply `RILL_LOG_<TOGGLE>` booleans and `NO_COLOR` from `lookup`.
    pub(crate) fn apply_lookup(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        let flag = |key: &str| lookup(key).and_then(|v| parse_flag(&v));

        if let Some(v) = flag("RILL_LOG_TIME") {
            self.time = v;
        }
        if let Some(v) = flag("RILL_LOG_TARGET") {
            self.target = v;
        }
        if let Some(v) = flag("RILL_LOG_THREAD_IDS") {
            self.thread_ids = v;
        }
        if let Some(v) = flag("RILL_LOG_SOURCE") {
            self.source = v;
        }
        if let Some(v) = flag("RILL_LOG_COLORS") {
            self.colors = v;
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.colors = false;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
