//! File-based debug logger
//!
//! Appends to `appmgt-debug.log` in the temp directory. Useful when the host
//! swallows stderr. Off unless `APPMGT_DEBUG` is `1`/`true`; the minimum level
//! comes from `APPMGT_LOG_LEVEL` (default `debug`).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::SystemTime;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::traits::Logger;

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
    /// Parse a level name, falling back to `Debug` for anything unrecognised
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "trace" => LogLevel::Trace,
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
    enabled: bool,
}

impl FileLoggerState {
    fn from_env() -> Self {
        let enabled = std::env::var("APPMGT_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let min_level = std::env::var("APPMGT_LOG_LEVEL")
            .map(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Debug);

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

        Self { file, min_level, enabled }
    }

    fn write(&mut self, level: LogLevel, module: &str, message: &str) {
        if !self.enabled || level < self.min_level {
            return;
        }

        if let Some(ref mut file) = self.file {
            let timestamp = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| {
                    let secs = d.as_secs();
                    format!(
                        "{:02}:{:02}:{:02}.{:03}",
                        (secs % 86400) / 3600,
                        (secs % 3600) / 60,
                        secs % 60,
                        d.subsec_millis()
                    )
                })
                .unwrap_or_else(|_| "??:??:??.???".to_string());

            let _ = writeln!(file, "[{}] [{}] [{}] {}", timestamp, level, module, message);
            let _ = file.flush();
        }
    }
}

static STATE: Lazy<Mutex<FileLoggerState>> = Lazy::new(|| Mutex::new(FileLoggerState::from_env()));

/// Log a message at the specified level
pub fn log(level: LogLevel, module: &str, message: &str) {
    STATE.lock().write(level, module, message);
}

/// Whether `APPMGT_DEBUG` turned the file log on
pub fn is_enabled() -> bool {
    STATE.lock().enabled
}

/// Get the path to the log file
pub fn log_file_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("appmgt-debug.log");
    path
}

/// [`Logger`] adapter over the debug log file, tagging lines with a module name
#[derive(Debug, Clone)]
pub struct FileLogger {
    module: String,
}

impl FileLogger {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new("appmgt")
    }
}

impl Logger for FileLogger {
    fn debug(&self, message: &str) {
        log(LogLevel::Debug, &self.module, message);
    }

    fn info(&self, message: &str) {
        log(LogLevel::Info, &self.module, message);
    }

    fn warn(&self, message: &str) {
        log(LogLevel::Warn, &self.module, message);
    }

    fn error(&self, message: &str) {
        log(LogLevel::Error, &self.module, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Debug > LogLevel::Trace);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("WARNING"), LogLevel::Warn);
        assert_eq!(LogLevel::parse(" error "), LogLevel::Error);
        assert_eq!(LogLevel::parse("verbose"), LogLevel::Debug);
    }

    #[test]
    fn test_file_logger_does_not_panic() {
        let logger = FileLogger::new("test");
        logger.debug("debug message");
        logger.error("error message");
        assert!(log_file_path().ends_with("appmgt-debug.log"));
    }
}
