//! # rill-log
//!
//! Subscriber setup for the `rill` binaries. Libraries in the workspace only
//! emit `tracing` events; a binary calls [`auto_init`] (or [`init_with`])
//! once at startup and keeps the returned guard alive.
//!
//! ```no_run
//! let _guard = rill_log::auto_init()?;
//! tracing::info!("ready");
//! # Ok::<(), rill_log::LogError>(())
//! ```
//!
//! Output always goes to stderr so stdout stays free for command results.

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Initialise logging from the environment (`RILL_LOG`, `RILL_LOG_FORMAT`,
/// `RUST_LOG`, display toggles).
pub fn auto_init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Initialise logging with an explicit configuration.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Commonly used items
pub mod prelude {
    pub use crate::{Config, Format, LogError, LogResult, LoggerGuard, auto_init, init_with};
    pub use tracing::{debug, error, info, trace, warn};
}
