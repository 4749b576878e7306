//! Engine configuration
//!
//! Two values used to be implicit host properties: the date pattern
//! substituted for a blank pattern, and the character set used to decode byte
//! buffers. Both are explicit here. A process-wide [`CoerceConfig`] is
//! installed with [`install`]; conversions read it through [`current`].

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::error::{CoerceError, CoerceResult};

/// Pattern used when a caller passes a blank date pattern.
pub const DEFAULT_DATE_PATTERN: &str = "dd-MM-yyyy";

/// Environment variable overriding [`CoerceConfig::default_date_pattern`]
pub const ENV_DATE_PATTERN: &str = "RILL_DATE_PATTERN";

/// Environment variable overriding [`CoerceConfig::charset`]
pub const ENV_CHARSET: &str = "RILL_CHARSET";

static CURRENT: LazyLock<ArcSwap<CoerceConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(CoerceConfig::default()));

/// Coercion engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoerceConfig {
    /// Date pattern substituted for a blank pattern
    pub default_date_pattern: String,

    /// Character set used to decode byte buffers into text
    pub charset: Charset,
}

/// Character set for byte buffer decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    /// UTF-8, malformed sequences replaced with U+FFFD
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// ISO-8859-1, every byte maps to the code point of the same value
    #[serde(rename = "iso-8859-1", alias = "latin1")]
    Latin1,
}

impl Charset {
    /// Parse a charset name (case-insensitive)
    pub fn from_name(name: &str) -> CoerceResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Self::Latin1),
            _ => Err(CoerceError::invalid_config(ENV_CHARSET, name)),
        }
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Decode `bytes` into text
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Charset {
    type Err = CoerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Default for CoerceConfig {
    fn default() -> Self {
        Self {
            default_date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            charset: Charset::default(),
        }
    }
}

impl CoerceConfig {
    /// Create configuration from environment variables
    ///
    /// Unset variables keep their defaults; an unknown charset name is an
    /// error rather than a silent fallback.
    pub fn from_env() -> CoerceResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CoerceResult<Self> {
        let mut config = Self::default();

        if let Some(pattern) = lookup(ENV_DATE_PATTERN).filter(|p| !p.trim().is_empty()) {
            config.default_date_pattern = pattern;
        }

        if let Some(charset) = lookup(ENV_CHARSET) {
            config.charset = Charset::from_name(&charset)?;
        }

        Ok(config)
    }

    /// Builder-style pattern override
    pub fn with_default_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.default_date_pattern = pattern.into();
        self
    }

    /// Builder-style charset override
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }
}

/// Install `config` as the process-wide configuration.
pub fn install(config: CoerceConfig) {
    tracing::debug!(
        default_date_pattern = %config.default_date_pattern,
        charset = %config.charset,
        "installing coercion config"
    );
    CURRENT.store(Arc::new(config));
}

/// Snapshot of the process-wide configuration.
pub fn current() -> Arc<CoerceConfig> {
    CURRENT.load_full()
}

/// Restore the built-in defaults.
pub fn reset() {
    CURRENT.store(Arc::new(CoerceConfig::default()));
}
