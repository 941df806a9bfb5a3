//! # Loglazy
//!
//! Lazily evaluated, level-gated logging helpers for any call site.
//!
//! ## Features
//!
//! - Per-level helpers that build the message only when the level is enabled
//! - Success logging around a unit of work
//! - Timing of a unit of work with human-readable durations
//! - Failure lines that leave the original error untouched
//! - Integration with the `tracing` ecosystem (and `log` behind a feature)
//!
//! ## Example
//!
//! ```rust
//! use loglazy::{LazyLog, LogWork, logger_named};
//!
//! let log = logger_named("orders");
//!
//! log.log_info(|| format!("{} orders pending", 3));
//! let total = log.log_success("orders summed", || -> Result<u32, std::num::ParseIntError> {
//!     Ok("40".parse::<u32>()? + 2)
//! })?;
//! assert_eq!(total, 42);
//! # Ok::<(), std::num::ParseIntError>(())
//! ```

pub mod builder;
pub mod channel;
pub mod config;
pub mod duration;
pub mod emitter;
pub mod error;
pub mod level;
pub mod wrapper;

#[cfg(feature = "subscriber")]
pub mod tracing_init;

pub use builder::LogBuilder;
#[cfg(feature = "log")]
pub use channel::LogCrateChannel;
pub use channel::{LogChannel, TracingChannel, logger, logger_named, logger_of};
pub use config::LogConfig;
pub use duration::{format_duration, format_millis};
pub use emitter::LazyLog;
pub use error::{Error, Result};
pub use level::LogLevel;
pub use wrapper::LogWork;

#[cfg(feature = "subscriber")]
pub use tracing_init::init_logging;

/// Start a [`LogBuilder`] with default settings.
pub fn builder() -> LogBuilder {
    LogBuilder::new()
}
