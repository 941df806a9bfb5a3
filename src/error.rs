use thiserror::Error as ThisError;

/// Errors raised while configuring or installing logging.
///
/// Failures of wrapped work never pass through this type; they are handed
/// back to the caller exactly as the work produced them.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Initialization failed.
    #[error("Initialization error: {0}")]
    Init(String),
    /// Local UTC offset could not be determined for timestamps.
    #[cfg(feature = "time")]
    #[error("Time error: {0}")]
    Time(#[from] time::error::IndeterminateOffset),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
