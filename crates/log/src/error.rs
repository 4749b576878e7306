//! Logging setup errors

/// Result alias for logging setup
pub type LogResult<T> = Result<T, LogError>;

/// Failure while configuring or installing the subscriber
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The level directive string is not a valid `EnvFilter`
    #[error("invalid log filter {0}")]
    Filter(String),

    /// A configuration value could not be understood
    #[error("invalid log config: {0}")]
    Config(String),

    /// A global subscriber is already installed
    #[error("failed to install subscriber: {0}")]
    Init(String),
}
