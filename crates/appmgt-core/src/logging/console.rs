//! Console logger implementation

use super::file_logger::LogLevel;
use super::traits::Logger;

/// A logger that outputs to the console (stdout/stderr)
///
/// Messages below the minimum level (`Info` unless changed) are dropped, so the
/// per-binding traces emitted while loading stay out of normal output.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::with_prefix("[AppMgt]")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            min_level: LogLevel::Info,
        }
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let tag = level.to_string();
        match level {
            LogLevel::Info => println!("{} {}: {}", self.prefix, tag.trim_end(), message),
            _ => eprintln!("{} {}: {}", self.prefix, tag.trim_end(), message),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_filtered_by_default() {
        let logger = ConsoleLogger::new();
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Warn));

        let verbose = ConsoleLogger::with_prefix("[IdP]").with_min_level(LogLevel::Trace);
        assert!(verbose.enabled(LogLevel::Debug));
    }
}
