//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer and
//! forwards every line to a sink (browser console, stderr, ...).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// One formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {:<5} {}] {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Where each line goes after it is buffered
pub type Sink = Box<dyn Fn(&LogLine) + Send + Sync>;

#[derive(Debug)]
pub enum InitError {
    AlreadyInitialized,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::AlreadyInitialized => write!(f, "a logger is already installed"),
        }
    }
}

impl std::error::Error for InitError {}

struct RingBuffer {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl RingBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, line: LogLine) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }
}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
    sink: Sink,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize, sink: Sink) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
            sink,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        (self.sink)(&line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger at `Debug` level
pub fn init_logger(app_name: &str, capacity: usize, sink: Sink) -> Result<(), InitError> {
    init_logger_with_level(app_name, LevelFilter::Debug, capacity, sink)
}

pub fn init_logger_with_level(
    app_name: &str,
    level: LevelFilter,
    capacity: usize,
    sink: Sink,
) -> Result<(), InitError> {
    LOGGER
        .set(RollingLogger::new(app_name, level, capacity, sink))
        .map_err(|_| InitError::AlreadyInitialized)?;
    let logger = LOGGER.get().ok_or(InitError::AlreadyInitialized)?;
    log::set_logger(logger).map_err(|_| InitError::AlreadyInitialized)?;
    log::set_max_level(level);
    log::info!("{} logging started", app_name);
    Ok(())
}

/// Lines held by the global logger; empty before `init_logger`
pub fn recent_lines() -> Vec<LogLine> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}
