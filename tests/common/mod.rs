#![allow(dead_code)]

use std::cell::RefCell;
use std::error::Error as StdError;
use std::io;
use std::sync::{Arc, Mutex};

use loglazy::{LogChannel, LogLevel};
use tracing::level_filters::LevelFilter;

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a scoped fmt subscriber capped at `max_level` and return
/// what it wrote.
pub fn capture<R>(max_level: LevelFilter, f: impl FnOnce() -> R) -> (R, Captured) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, captured)
}

/// In-memory channel that records every line it is handed.
#[derive(Default)]
pub struct Recorder {
    pub max_level: Option<LogLevel>,
    pub lines: RefCell<Vec<Line>>,
    pub checks: RefCell<Vec<LogLevel>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub level: LogLevel,
    pub message: String,
    pub error: Option<String>,
}

impl Recorder {
    pub fn up_to(level: LogLevel) -> Self {
        Self {
            max_level: Some(level),
            ..Default::default()
        }
    }

    pub fn silent() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines.borrow().clone()
    }
}

impl LogChannel for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        self.checks.borrow_mut().push(level);
        self.max_level.is_some_and(|max| level <= max)
    }

    fn emit(&self, level: LogLevel, message: &str) {
        self.lines.borrow_mut().push(Line {
            level,
            message: message.to_string(),
            error: None,
        });
    }

    fn emit_error(&self, level: LogLevel, message: &str, error: &(dyn StdError + 'static)) {
        self.lines.borrow_mut().push(Line {
            level,
            message: message.to_string(),
            error: Some(error.to_string()),
        });
    }
}
