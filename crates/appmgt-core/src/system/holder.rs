//! Gated, build-once access to the system configuration

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::config::SystemConfig;
use crate::auth::{AccessResult, AllowAll, AuthorizationGate, SharedGate};
use crate::logging::{ConsoleLogger, Logger, SharedLogger};
use crate::registry::ProviderRegistry;
use crate::source::ConfigSource;

/// Owns everything needed to build a [`SystemConfig`] and builds it once
///
/// Every [`get_instance`](Self::get_instance) runs the authorization gate
/// first. The first authorized caller reads the source; concurrent callers
/// block until that finishes and then share the same instance. Later reads
/// take no lock.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use appmgt_core::auth::DenyAll;
/// use appmgt_core::source::MemoryConfigSource;
/// use appmgt_core::system::SystemConfigHolder;
///
/// let holder = SystemConfigHolder::new(Arc::new(MemoryConfigSource::new()));
/// let config = holder.get_instance().unwrap();
/// assert_eq!(config.get_claim_namespace(), "http://wso2.org/claims");
///
/// let locked = SystemConfigHolder::new(Arc::new(MemoryConfigSource::new()))
///     .with_gate(Arc::new(DenyAll::default()));
/// assert!(locked.get_instance().is_err());
/// ```
pub struct SystemConfigHolder {
    gate: SharedGate,
    source: Arc<dyn ConfigSource>,
    registry: Arc<ProviderRegistry>,
    logger: SharedLogger,
    instance: OnceCell<SystemConfig>,
}

impl SystemConfigHolder {
    /// Holder with an allow-all gate, the built-in registry and console logging
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            gate: Arc::new(AllowAll),
            source,
            registry: Arc::new(ProviderRegistry::with_builtins()),
            logger: Arc::new(ConsoleLogger::new()),
            instance: OnceCell::new(),
        }
    }

    pub fn with_gate(mut self, gate: SharedGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// The configuration, built on the first authorized call
    pub fn get_instance(&self) -> AccessResult<&SystemConfig> {
        self.gate.check()?;
        Ok(self.instance.get_or_init(|| {
            self.logger.debug(&format!(
                "Building application management configuration from {} source",
                self.source.name()
            ));
            SystemConfig::load(
                self.source.as_ref(),
                Arc::clone(&self.registry),
                Arc::clone(&self.logger),
            )
        }))
    }

    /// Whether the configuration has been built
    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }
}

impl std::fmt::Debug for SystemConfigHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemConfigHolder")
            .field("source", &self.source.name())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;
    use std::time::Duration;

    use crate::auth::AccessError;
    use crate::logging::{LogLevel, MemoryLogger};
    use crate::source::{ConfigNode, MemoryConfigSource, QualifiedName};
    use crate::system::SECTION;

    /// Counts section reads and stalls a little to widen the init race
    struct CountingSource {
        inner: MemoryConfigSource,
        reads: AtomicUsize,
    }

    impl CountingSource {
        fn new(inner: MemoryConfigSource) -> Self {
            Self {
                inner,
                reads: AtomicUsize::new(0),
            }
        }

        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    impl ConfigSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        fn config_element(&self, section: &str) -> Option<ConfigNode> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(20));
            self.inner.config_element(section)
        }
    }

    fn configured_source() -> MemoryConfigSource {
        MemoryConfigSource::new().with_section(
            ConfigNode::new(QualifiedName::identity(SECTION))
                .with_text_child(QualifiedName::identity("ClaimDialect"), "http://example.org/claims")
                .with_text_child(QualifiedName::identity("ApplicationDAO"), "default-application-store"),
        )
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let source = Arc::new(CountingSource::new(configured_source()));
        let holder = SystemConfigHolder::new(source.clone())
            .with_logger(Arc::new(MemoryLogger::new()));
        let callers = 8;
        let barrier = Barrier::new(callers);

        let addresses: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..callers)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        let config = holder.get_instance().unwrap();
                        assert_eq!(config.get_claim_namespace(), "http://example.org/claims");
                        config as *const SystemConfig as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(source.reads(), 1);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert!(holder.is_initialized());
    }

    #[test]
    fn test_repeated_access_reuses_instance() {
        let source = Arc::new(CountingSource::new(MemoryConfigSource::new()));
        let logger = Arc::new(MemoryLogger::new());
        let holder = SystemConfigHolder::new(source.clone()).with_logger(logger.clone());

        let first = holder.get_instance().unwrap();
        let second = holder.get_instance().unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(source.reads(), 1);
        // Missing section warned about exactly once
        assert_eq!(logger.count(LogLevel::Warn), 1);
    }

    #[test]
    fn test_denied_gate_reads_nothing() {
        let source = Arc::new(CountingSource::new(configured_source()));
        let allowed = Arc::new(AtomicBool::new(false));
        let flag = allowed.clone();
        let holder = SystemConfigHolder::new(source.clone()).with_gate(Arc::new(move || {
            if flag.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(AccessError::denied("caller lacks permission"))
            }
        }));

        let err = holder.get_instance().unwrap_err();
        assert_eq!(err, AccessError::denied("caller lacks permission"));
        assert_eq!(source.reads(), 0);
        assert!(!holder.is_initialized());

        allowed.store(true, Ordering::SeqCst);
        assert!(holder.get_instance().is_ok());
        assert_eq!(source.reads(), 1);

        // The gate still applies after initialization
        allowed.store(false, Ordering::SeqCst);
        assert!(holder.get_instance().is_err());
    }

    #[test]
    fn test_custom_registry_is_used() {
        let source = MemoryConfigSource::new().with_section(
            ConfigNode::new(QualifiedName::identity(SECTION))
                .with_text_child(QualifiedName::identity("ApplicationDAO"), "default-application-store"),
        );
        let logger = Arc::new(MemoryLogger::new());
        let holder = SystemConfigHolder::new(Arc::new(source))
            .with_registry(ProviderRegistry::new())
            .with_logger(logger.clone());

        let config = holder.get_instance().unwrap();
        assert!(config.get_application_store().is_none());
        assert_eq!(logger.count(LogLevel::Error), 1);
    }
}
