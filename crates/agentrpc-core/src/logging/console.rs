//! Stderr logger for interactive runs

use super::file_logger::LogLevel;
use super::traits::Logger;

/// Writes every message at or above `min_level` to stderr
///
/// Stdout is reserved for command output, so even `info` goes to stderr.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    min_level: LogLevel,
}

const PREFIX: &str = "[agentrpc]";

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Debug,
        }
    }

    pub fn with_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    /// Logger for a verbosity setting such as `AGENTRPC_VERBOSE=warn`
    ///
    /// Anything that is not a level name (`1`, `true`) means `debug`.
    pub fn from_verbosity(value: &str) -> Self {
        Self::new().with_level(LogLevel::parse(value))
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn format(&self, level: LogLevel, message: &str) -> String {
        format!("{} {}: {}", PREFIX, level.to_string().trim_end(), message)
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            eprintln!("{}", self.format(level, message));
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }
}
