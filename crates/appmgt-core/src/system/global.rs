//! Process-wide system configuration holder
//!
//! Hosts that prefer passing a [`SystemConfigHolder`] around can ignore this
//! module. Otherwise install a holder at startup; if none was installed the
//! first access installs one reading [`default_config_path`] with an
//! allow-all gate and the built-in registry. It logs to the console, or to
//! the debug log file when `APPMGT_DEBUG` is set.
//!
//! [`default_config_path`]: crate::source::default_config_path

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::config::SystemConfig;
use super::holder::SystemConfigHolder;
use crate::auth::AccessResult;
use crate::logging::{file_logger, ConsoleLogger, FileLogger, SharedLogger};
use crate::source::FileConfigSource;

static GLOBAL_HOLDER: OnceCell<SystemConfigHolder> = OnceCell::new();

/// Install the process-wide holder
///
/// Fails, handing the holder back, if one is already installed.
pub fn install(holder: SystemConfigHolder) -> Result<(), SystemConfigHolder> {
    GLOBAL_HOLDER.set(holder)
}

/// The installed holder, installing the default one if necessary
pub fn holder() -> &'static SystemConfigHolder {
    GLOBAL_HOLDER.get_or_init(default_holder)
}

/// Authorized access to the process-wide configuration
pub fn get_instance() -> AccessResult<&'static SystemConfig> {
    holder().get_instance()
}

fn default_holder() -> SystemConfigHolder {
    let logger: SharedLogger = if file_logger::is_enabled() {
        Arc::new(FileLogger::default())
    } else {
        Arc::new(ConsoleLogger::new())
    };
    let source = FileConfigSource::user().with_logger(Arc::clone(&logger));
    SystemConfigHolder::new(Arc::new(source)).with_logger(logger)
}
