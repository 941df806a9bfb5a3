//! Builder pattern for initializing logging configuration.
//!
//! This module provides a convenient builder API for configuring and initializing
//! logging in a single chain of method calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use loglazy::LogLevel;
//!
//! let config = loglazy::builder()
//!     .with_console(true)
//!     .with_level("debug")
//!     .with_timing_level(LogLevel::Info)
//!     .init()
//!     .expect("Failed to initialize logging");
//! ```

#[cfg(feature = "subscriber")]
use crate::init_logging;
use crate::{LogConfig, LogLevel, Result};

/// A builder for configuring and initializing logging.
///
/// This provides a fluent interface for setting up logging configuration
/// and initializing the logging system in one chain of calls.
#[derive(Debug, Clone)]
pub struct LogBuilder {
    config: LogConfig,
    verbosity: Option<u8>,
}

impl LogBuilder {
    /// Create a new LogBuilder with default configuration.
    pub fn new() -> Self {
        Self::from_config(LogConfig::new())
    }

    /// Create a LogBuilder from an existing configuration.
    pub fn from_config(config: LogConfig) -> Self {
        Self {
            config,
            verbosity: None,
        }
    }

    /// Enable or disable console logging.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config = self.config.with_console(enabled);
        self
    }

    /// Set the log level (e.g., "trace", "debug", "info", "warn", "error").
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config = self.config.with_level(level.into());
        self
    }

    /// Set the log output format ("text" or "json").
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.config = self.config.with_format(format.into());
        self
    }

    /// Show target/module in logs
    pub fn with_target(mut self, target: bool) -> Self {
        self.config = self.config.with_target(target);
        self
    }

    /// Show thread IDs in logs
    pub fn with_thread_ids(mut self, thread_ids: bool) -> Self {
        self.config = self.config.with_thread_ids(thread_ids);
        self
    }

    /// Show thread names in logs
    pub fn with_thread_names(mut self, thread_names: bool) -> Self {
        self.config = self.config.with_thread_names(thread_names);
        self
    }

    pub fn with_success_level(mut self, level: LogLevel) -> Self {
        self.config = self.config.with_success_level(level);
        self
    }

    pub fn with_timing_level(mut self, level: LogLevel) -> Self {
        self.config = self.config.with_timing_level(level);
        self
    }

    /// Raise verbosity the way a repeated `-v` flag would.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    /// Get the current configuration without initializing.
    pub fn build(self) -> LogConfig {
        self.config
    }

    /// Initialize logging with the configured settings.
    ///
    /// This consumes the builder, initializes the global logging system and
    /// returns the configuration that was installed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tracing subscriber is already initialized
    /// - Invalid configuration is provided
    #[cfg(feature = "subscriber")]
    pub fn init(self) -> Result<LogConfig> {
        init_logging(&self.config, self.verbosity)?;
        Ok(self.config)
    }

    /// Validate the configuration; without the `subscriber` feature nothing is
    /// installed.
    #[cfg(not(feature = "subscriber"))]
    pub fn init(self) -> Result<LogConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
