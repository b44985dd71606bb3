//! Logging abstractions
//!
//! Every component that emits diagnostics takes a [`SharedLogger`], so hosts decide
//! where warnings about missing configuration and provider failures end up.

mod traits;
mod noop;
mod console;
mod memory;
pub mod file_logger;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::{LogEntry, MemoryLogger};

pub use file_logger::{FileLogger, LogLevel, log_file_path};
