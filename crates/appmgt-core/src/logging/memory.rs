//! In-memory logger that keeps every entry

use parking_lot::Mutex;

use super::file_logger::LogLevel;
use super::traits::Logger;

/// A captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that records entries in memory
///
/// Handy for asserting on diagnostics:
///
/// ```
/// use appmgt_core::logging::{Logger, LogLevel, MemoryLogger};
///
/// let logger = MemoryLogger::new();
/// logger.warn("section missing");
/// assert_eq!(logger.count(LogLevel::Warn), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Messages logged at exactly `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.lock().iter().filter(|e| e.level == level).count()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.entries.lock().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LoggerExt;

    #[test]
    fn test_memory_logger_captures_levels() {
        let logger = MemoryLogger::new();
        logger.debug("d");
        logger.warn("w");
        logger.error_fmt(format_args!("failed {}", 42));

        assert_eq!(logger.entries().len(), 3);
        assert_eq!(logger.count(LogLevel::Warn), 1);
        assert_eq!(logger.messages(LogLevel::Error), vec!["failed 42".to_string()]);

        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
