//! Logger trait definition

use std::sync::Arc;

/// Logger abstraction
///
/// Implementations:
/// - `NoOpLogger`: Silent logger
/// - `ConsoleLogger`: Logs to stdout/stderr
/// - `MemoryLogger`: Captures entries, mostly for tests
/// - `FileLogger`: Appends to the debug log file
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.debug(&args.to_string());
    }

    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}
