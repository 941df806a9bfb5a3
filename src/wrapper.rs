//! Wrappers that log around a unit of work.
//!
//! A unit of work is any `FnOnce() -> Result<T, E>`. Whatever it returns is
//! handed back untouched; `Err` values are never wrapped or converted. A
//! panic inside the work counts as a failure as well: the failure line is
//! written while unwinding and the panic carries on as if no wrapper were
//! present.
//!
//! ```rust
//! use loglazy::{LogWork, logger_named};
//!
//! let log = logger_named("import");
//! let rows = log.log_time("row import", || Ok::<_, std::io::Error>(42))?;
//! assert_eq!(rows, 42);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::thread;
use std::time::Instant;

use crate::{LazyLog, LogChannel, LogLevel, format_duration};

/// Level of the success line when none is given.
pub const DEFAULT_SUCCESS_LEVEL: LogLevel = LogLevel::Info;

/// Level of the timing line when none is given.
pub const DEFAULT_TIMING_LEVEL: LogLevel = LogLevel::Debug;

/// Runs `on_unwind` if dropped while the thread is panicking.
struct UnwindGuard<F: FnOnce()> {
    on_unwind: Option<F>,
}

impl<F: FnOnce()> UnwindGuard<F> {
    fn new(on_unwind: F) -> Self {
        Self {
            on_unwind: Some(on_unwind),
        }
    }

    fn disarm(mut self) {
        self.on_unwind = None;
    }
}

impl<F: FnOnce()> Drop for UnwindGuard<F> {
    fn drop(&mut self) {
        if let Some(on_unwind) = self.on_unwind.take()
            && thread::panicking()
        {
            on_unwind();
        }
    }
}

/// Success and timing wrappers, available on every [`LogChannel`].
pub trait LogWork: LogChannel {
    /// Run `work` and log `message` at Info once it succeeds.
    ///
    /// On failure a Warning line `Failed: <message>` is written instead and
    /// the failure is returned unchanged.
    fn log_success<T, E, W>(&self, message: &str, work: W) -> Result<T, E>
    where
        W: FnOnce() -> Result<T, E>,
    {
        self.log_success_at(DEFAULT_SUCCESS_LEVEL, || message.to_string(), work)
    }

    /// Like [`log_success`](LogWork::log_success), building the message
    /// lazily.
    fn log_success_with<T, E, M, W>(&self, message: M, work: W) -> Result<T, E>
    where
        M: Fn() -> String,
        W: FnOnce() -> Result<T, E>,
    {
        self.log_success_at(DEFAULT_SUCCESS_LEVEL, message, work)
    }

    /// Run `work` and log the produced message at `level` once it succeeds.
    ///
    /// `message` is not called before `work` finishes. It may be called on
    /// the failure path too, to build the `Failed: ` line.
    fn log_success_at<T, E, M, W>(&self, level: LogLevel, message: M, work: W) -> Result<T, E>
    where
        M: Fn() -> String,
        W: FnOnce() -> Result<T, E>,
    {
        let failed = || self.log_warning(|| format!("Failed: {}", message()));

        let guard = UnwindGuard::new(failed);
        let outcome = work();
        guard.disarm();

        match outcome {
            Ok(value) => {
                self.log_lazy(level, &message);
                Ok(value)
            }
            Err(err) => {
                failed();
                Err(err)
            }
        }
    }

    /// Run `work` and log how long it took at Debug.
    ///
    /// Success writes `The execution of the <name> took <duration>`; failure
    /// writes `<name> execution failed after <duration>` at Warning and
    /// returns the failure unchanged.
    fn log_time<T, E, W>(&self, name: &str, work: W) -> Result<T, E>
    where
        W: FnOnce() -> Result<T, E>,
    {
        self.log_time_at(name, DEFAULT_TIMING_LEVEL, work)
    }

    /// Like [`log_time`](LogWork::log_time) with the success line at
    /// `level`.
    fn log_time_at<T, E, W>(&self, name: &str, level: LogLevel, work: W) -> Result<T, E>
    where
        W: FnOnce() -> Result<T, E>,
    {
        let start = Instant::now();
        let failed = || {
            self.log_warning(|| {
                format!(
                    "{name} execution failed after {}",
                    format_duration(start.elapsed())
                )
            })
        };

        let guard = UnwindGuard::new(failed);
        let outcome = work();
        guard.disarm();

        match outcome {
            Ok(value) => {
                self.log_lazy(level, || {
                    format!(
                        "The execution of the {name} took {}",
                        format_duration(start.elapsed())
                    )
                });
                Ok(value)
            }
            Err(err) => {
                failed();
                Err(err)
            }
        }
    }
}

impl<C: LogChannel + ?Sized> LogWork for C {}
