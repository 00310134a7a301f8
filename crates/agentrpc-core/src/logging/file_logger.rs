//! File-based debug logger
//!
//! Writes transport-level events to `<tmp>/agentrpc-debug.log`. Disabled
//! unless `AGENTRPC_DEBUG` is `1` or `true`; `AGENTRPC_LOG_LEVEL` sets the
//! minimum level (default `debug`).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name, falling back to `Debug` for anything unknown
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Debug,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO "),
            LogLevel::Warn => write!(f, "WARN "),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

struct FileLoggerState {
    file: Option<File>,
    min_level: LogLevel,
}

impl FileLoggerState {
    fn from_env() -> Self {
        let enabled = std::env::var("AGENTRPC_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        // Only touch the filesystem when someone asked for the log
        let file = if enabled {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file_path())
                .ok()
        } else {
            None
        };

        let min_level = std::env::var("AGENTRPC_LOG_LEVEL")
            .map(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Debug);

        Self { file, min_level }
    }

    fn write(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        if let Some(ref mut file) = self.file {
            let _ = writeln!(file, "[{}] [{}] [{}] {}", timestamp(), level, module, message);
            let _ = file.flush();
        }
    }
}

fn timestamp() -> String {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs();
            let millis = d.subsec_millis();
            let hours = (secs % 86400) / 3600;
            let mins = (secs % 3600) / 60;
            let secs = secs % 60;
            format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
        })
        .unwrap_or_else(|_| "??:??:??.???".to_string())
}

static LOGGER: OnceLock<Mutex<FileLoggerState>> = OnceLock::new();

fn get_logger() -> &'static Mutex<FileLoggerState> {
    LOGGER.get_or_init(|| Mutex::new(FileLoggerState::from_env()))
}

/// Log a message at the specified level
pub fn log(level: LogLevel, module: &str, message: &str) {
    if let Ok(mut logger) = get_logger().lock() {
        logger.write(level, module, message);
    }
}

pub fn trace(module: &str, message: &str) {
    log(LogLevel::Trace, module, message);
}

pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Get the path to the log file
pub fn log_file_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("agentrpc-debug.log");
    path
}
