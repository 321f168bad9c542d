//! Ring Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer.
//! On `wasm32` every record is also forwarded to the browser console at the
//! matching level.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RingLogger> = OnceLock::new();

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub at: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} [{}] {}",
            self.at.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular-buffer logger
pub struct RingLogger {
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RingLogger {
    /// Create a logger that retains at most `capacity` records (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of retained records, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }

    fn push(&self, line: LogLine) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            at: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        #[cfg(target_arch = "wasm32")]
        console::write(&line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
mod console {
    use super::LogLine;
    use log::Level;

    pub fn write(line: &LogLine) {
        let text = line.to_string();
        match line.level {
            Level::Error => web_sys::console::error_1(&text.into()),
            Level::Warn => web_sys::console::warn_1(&text.into()),
            Level::Info => web_sys::console::info_1(&text.into()),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&text.into()),
        }
    }
}

/// Install the global logger
///
/// The buffer is created on the first call; later calls fail with
/// `SetLoggerError` because `log` only accepts one logger per process.
pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static RingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RingLogger::new(capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// The installed logger, if `init` has run
pub fn logger() -> Option<&'static RingLogger> {
    LOGGER.get()
}
