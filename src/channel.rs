//! Log channels: the handles the helpers emit through.
//!
//! A [`LogChannel`] answers two questions per [`LogLevel`]: is the level
//! enabled, and where does a finished line go. The helpers in this crate only
//! consume the trait; which backend sits behind it is up to the caller.
//!
//! Three acquisition modes return equivalent handles:
//!
//! ```rust
//! use loglazy::{LogChannel, logger, logger_named, logger_of};
//!
//! struct Scheduler;
//!
//! let by_type = logger::<Scheduler>();
//! let by_value = logger_of(&Scheduler);
//! let by_name = logger_named("scheduler");
//!
//! assert_eq!(by_type.name(), by_value.name());
//! assert_eq!(by_name.name(), "scheduler");
//! ```

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::LogLevel;

/// A named destination for log lines.
pub trait LogChannel {
    /// Name the channel was acquired under.
    fn name(&self) -> &str;

    /// Whether a line at `level` would be recorded.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Record a finished line at `level`.
    fn emit(&self, level: LogLevel, message: &str);

    /// Record a finished line at `level` together with the error it concerns.
    fn emit_error(&self, level: LogLevel, message: &str, error: &(dyn StdError + 'static));
}

impl<C: LogChannel + ?Sized> LogChannel for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        (**self).is_enabled(level)
    }

    fn emit(&self, level: LogLevel, message: &str) {
        (**self).emit(level, message)
    }

    fn emit_error(&self, level: LogLevel, message: &str, error: &(dyn StdError + 'static)) {
        (**self).emit_error(level, message, error)
    }
}

// tracing callsites need a constant level, so every level gets its own arm.
macro_rules! at_level {
    ($level:expr, $mac:ident!()) => {
        match $level {
            LogLevel::Error => tracing::$mac!(tracing::Level::ERROR),
            LogLevel::Warning => tracing::$mac!(tracing::Level::WARN),
            LogLevel::Info => tracing::$mac!(tracing::Level::INFO),
            LogLevel::Debug => tracing::$mac!(tracing::Level::DEBUG),
            LogLevel::Trace => tracing::$mac!(tracing::Level::TRACE),
        }
    };
    ($level:expr, $mac:ident!($($arg:tt)+)) => {
        match $level {
            LogLevel::Error => tracing::$mac!(tracing::Level::ERROR, $($arg)+),
            LogLevel::Warning => tracing::$mac!(tracing::Level::WARN, $($arg)+),
            LogLevel::Info => tracing::$mac!(tracing::Level::INFO, $($arg)+),
            LogLevel::Debug => tracing::$mac!(tracing::Level::DEBUG, $($arg)+),
            LogLevel::Trace => tracing::$mac!(tracing::Level::TRACE, $($arg)+),
        }
    };
}

/// Channel backed by the `tracing` facade.
///
/// Records are dispatched to the current subscriber with the channel name in a
/// `channel` field and, for error-carrying lines, the error in an `error`
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingChannel {
    name: Cow<'static, str>,
}

impl TracingChannel {
    /// Channel with a free-form name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Channel named after the type `T`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::named(std::any::type_name::<T>())
    }

    /// Channel named after the runtime type of `value`.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self::named(std::any::type_name_of_val(value))
    }
}

impl LogChannel for TracingChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        at_level!(level, enabled!())
    }

    fn emit(&self, level: LogLevel, message: &str) {
        at_level!(level, event!(channel = %self.name, "{}", message))
    }

    fn emit_error(&self, level: LogLevel, message: &str, error: &(dyn StdError + 'static)) {
        at_level!(
            level,
            event!(channel = %self.name, error = error, "{}", message)
        )
    }
}

/// Channel for the type `T`.
pub fn logger<T: ?Sized>() -> TracingChannel {
    TracingChannel::for_type::<T>()
}

/// Channel for the runtime type of `value`.
pub fn logger_of<T: ?Sized>(value: &T) -> TracingChannel {
    TracingChannel::of(value)
}

/// Channel with a free-form name.
pub fn logger_named(name: impl Into<Cow<'static, str>>) -> TracingChannel {
    TracingChannel::named(name)
}

/// Channel backed by the `log` facade, using the channel name as the record
/// target so `log` filters can select it by name.
#[cfg(feature = "log")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCrateChannel {
    target: Cow<'static, str>,
}

#[cfg(feature = "log")]
impl LogCrateChannel {
    /// Channel with a free-form target.
    pub fn named(target: impl Into<Cow<'static, str>>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Channel targeted at the type `T`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::named(std::any::type_name::<T>())
    }

    /// Channel targeted at the runtime type of `value`.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self::named(std::any::type_name_of_val(value))
    }
}

#[cfg(feature = "log")]
impl LogChannel for LogCrateChannel {
    fn name(&self) -> &str {
        &self.target
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        log::log_enabled!(target: &*self.target, log::Level::from(level))
    }

    fn emit(&self, level: LogLevel, message: &str) {
        log::log!(target: &*self.target, log::Level::from(level), "{}", message);
    }

    fn emit_error(&self, level: LogLevel, message: &str, error: &(dyn StdError + 'static)) {
        let level = log::Level::from(level);
        let description = error.to_string();
        // A message that is already the error's own text is recorded once.
        if message == description {
            log::log!(target: &*self.target, level, "{}", message);
        } else {
            log::log!(target: &*self.target, level, "{}: {}", message, description);
        }
    }
}
