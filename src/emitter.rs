//! Level-gated, lazily evaluated emission.
//!
//! Every method here checks [`LogChannel::is_enabled`] before touching the
//! message producer. A disabled level costs one enablement query and nothing
//! else: the producer is never called, so no string is built.
//!
//! ```rust
//! use loglazy::{LazyLog, logger_named};
//!
//! let log = logger_named("cache");
//! let entries = vec![1, 2, 3];
//! log.log_debug(|| format!("cache holds {} entries", entries.len()));
//! ```

use std::error::Error as StdError;
use std::panic::Location;

use crate::{LogChannel, LogLevel};

/// Gated emission helpers, available on every [`LogChannel`].
pub trait LazyLog: LogChannel {
    /// Emit the message produced by `message` at `level` if that level is
    /// enabled. `message` runs at most once.
    fn log_lazy<F>(&self, level: LogLevel, message: F)
    where
        F: FnOnce() -> String,
    {
        if self.is_enabled(level) {
            self.emit(level, &message());
        }
    }

    /// Emit the message produced by `message` together with `error` at
    /// `level` if that level is enabled.
    fn log_error_lazy<E, F>(&self, level: LogLevel, error: &E, message: F)
    where
        E: StdError + 'static,
        F: FnOnce() -> String,
    {
        if self.is_enabled(level) {
            self.emit_error(level, &message(), error);
        }
    }

    /// Emit `error` at `level`, using its own description as the message.
    fn log_error_message<E>(&self, level: LogLevel, error: &E)
    where
        E: StdError + 'static,
    {
        self.log_error_lazy(level, error, || error.to_string());
    }

    fn log_error<F: FnOnce() -> String>(&self, message: F) {
        self.log_lazy(LogLevel::Error, message);
    }

    fn log_warning<F: FnOnce() -> String>(&self, message: F) {
        self.log_lazy(LogLevel::Warning, message);
    }

    fn log_info<F: FnOnce() -> String>(&self, message: F) {
        self.log_lazy(LogLevel::Info, message);
    }

    fn log_debug<F: FnOnce() -> String>(&self, message: F) {
        self.log_lazy(LogLevel::Debug, message);
    }

    fn log_trace<F: FnOnce() -> String>(&self, message: F) {
        self.log_lazy(LogLevel::Trace, message);
    }

    fn log_error_with<E, F>(&self, error: &E, message: F)
    where
        E: StdError + 'static,
        F: FnOnce() -> String,
    {
        self.log_error_lazy(LogLevel::Error, error, message);
    }

    fn log_warning_with<E, F>(&self, error: &E, message: F)
    where
        E: StdError + 'static,
        F: FnOnce() -> String,
    {
        self.log_error_lazy(LogLevel::Warning, error, message);
    }

    fn log_info_with<E, F>(&self, error: &E, message: F)
    where
        E: StdError + 'static,
        F: FnOnce() -> String,
    {
        self.log_error_lazy(LogLevel::Info, error, message);
    }

    fn log_debug_with<E, F>(&self, error: &E, message: F)
    where
        E: StdError + 'static,
        F: FnOnce() -> String,
    {
        self.log_error_lazy(LogLevel::Debug, error, message);
    }

    fn log_trace_with<E, F>(&self, error: &E, message: F)
    where
        E: StdError + 'static,
        F: FnOnce() -> String,
    {
        self.log_error_lazy(LogLevel::Trace, error, message);
    }

    fn log_error_of<E: StdError + 'static>(&self, error: &E) {
        self.log_error_message(LogLevel::Error, error);
    }

    fn log_warning_of<E: StdError + 'static>(&self, error: &E) {
        self.log_error_message(LogLevel::Warning, error);
    }

    fn log_info_of<E: StdError + 'static>(&self, error: &E) {
        self.log_error_message(LogLevel::Info, error);
    }

    fn log_debug_of<E: StdError + 'static>(&self, error: &E) {
        self.log_error_message(LogLevel::Debug, error);
    }

    fn log_trace_of<E: StdError + 'static>(&self, error: &E) {
        self.log_error_message(LogLevel::Trace, error);
    }

    /// Mark a piece of work as not done yet.
    ///
    /// **`work` is never executed.** It is accepted only so the intended code
    /// can sit at the call site, type-checked, until it is ready. What this
    /// records is a Warning line `TODO <label> (<file>:<line>:<column>)`
    /// pointing at the caller. Do not use it to run anything.
    #[track_caller]
    fn pending<T, W>(&self, label: &str, work: W)
    where
        W: FnOnce() -> T,
    {
        let location = Location::caller();
        drop(work);
        self.log_lazy(LogLevel::Warning, || format!("TODO {label} ({location})"));
    }
}

impl<C: LogChannel + ?Sized> LazyLog for C {}
