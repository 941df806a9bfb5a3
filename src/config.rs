use serde::{Deserialize, Serialize};

use crate::wrapper::{DEFAULT_SUCCESS_LEVEL, DEFAULT_TIMING_LEVEL};
use crate::{Error, LogLevel, Result};

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Enable console logging
    #[serde(default)]
    pub console: bool,
    /// Filter level or directive spec (e.g., "info", "debug,hyper=warn")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format ("text" or "json")
    #[serde(default = "default_format")]
    pub format: String,
    /// Show target/module in logs
    #[serde(default)]
    pub target: bool,
    /// Show thread IDs in logs
    #[serde(default)]
    pub thread_ids: bool,
    /// Show thread names in logs
    #[serde(default)]
    pub thread_names: bool,
    /// Level applications pass to the success wrapper
    #[serde(default = "default_success_level")]
    pub success_level: LogLevel,
    /// Level applications pass to the timing wrapper
    #[serde(default = "default_timing_level")]
    pub timing_level: LogLevel,
}

impl LogConfig {
    /// Create a new LogConfig with defaults
    pub fn new() -> Self {
        Self {
            console: false,
            level: default_log_level(),
            format: default_format(),
            target: false,
            thread_ids: false,
            thread_names: false,
            success_level: default_success_level(),
            timing_level: default_timing_level(),
        }
    }

    /// Enable console logging
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Set log level
    pub fn with_level(mut self, level: String) -> Self {
        self.level = level;
        self
    }

    /// Set log format
    pub fn with_format(mut self, format: String) -> Self {
        self.format = format;
        self
    }

    pub fn with_target(mut self, target: bool) -> Self {
        self.target = target;
        self
    }

    pub fn with_thread_ids(mut self, thread_ids: bool) -> Self {
        self.thread_ids = thread_ids;
        self
    }

    pub fn with_thread_names(mut self, thread_names: bool) -> Self {
        self.thread_names = thread_names;
        self
    }

    pub fn with_success_level(mut self, level: LogLevel) -> Self {
        self.success_level = level;
        self
    }

    pub fn with_timing_level(mut self, level: LogLevel) -> Self {
        self.timing_level = level;
        self
    }

    /// Whether the output format is JSON.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Check settings that can be judged without installing a subscriber.
    pub fn validate(&self) -> Result<()> {
        if !self.format.eq_ignore_ascii_case("text") && !self.is_json() {
            return Err(Error::Config(format!(
                "invalid log format: {}, supported: text/json",
                self.format
            )));
        }
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_success_level() -> LogLevel {
    DEFAULT_SUCCESS_LEVEL
}

fn default_timing_level() -> LogLevel {
    DEFAULT_TIMING_LEVEL
}
