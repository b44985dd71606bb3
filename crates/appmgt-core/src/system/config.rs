//! Resolved system configuration and store resolution

use std::any::Any;
use std::sync::Arc;

use super::loader::load_bindings;
use crate::logging::{LoggerExt, SharedLogger};
use crate::registry::{ProviderRegistry, ResolveResult};
use crate::source::ConfigSource;
use crate::stores::{
    ApplicationStore, DefaultApplicationStore, DefaultIdentityProviderStore,
    DefaultOAuthClientStore, DefaultSamlClientStore, IdentityProviderStore, OAuthClientStore,
    SamlClientStore, Store,
};
use crate::types::{NamespaceBinding, ProviderBinding, ProviderBindings, ProviderKind};

/// A store of any kind, as returned by [`SystemConfig::resolve`]
#[derive(Clone)]
pub enum ResolvedStore {
    Application(Arc<dyn ApplicationStore>),
    OAuthClient(Arc<dyn OAuthClientStore>),
    SamlClient(Arc<dyn SamlClientStore>),
    IdentityProvider(Arc<dyn IdentityProviderStore>),
}

impl ResolvedStore {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ResolvedStore::Application(_) => ProviderKind::Application,
            ResolvedStore::OAuthClient(_) => ProviderKind::OAuthClient,
            ResolvedStore::SamlClient(_) => ProviderKind::SamlClient,
            ResolvedStore::IdentityProvider(_) => ProviderKind::IdentityProvider,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResolvedStore::Application(s) => s.name(),
            ResolvedStore::OAuthClient(s) => s.name(),
            ResolvedStore::SamlClient(s) => s.name(),
            ResolvedStore::IdentityProvider(s) => s.name(),
        }
    }

    pub fn as_any(&self) -> &dyn Any {
        match self {
            ResolvedStore::Application(s) => s.as_any(),
            ResolvedStore::OAuthClient(s) => s.as_any(),
            ResolvedStore::SamlClient(s) => s.as_any(),
            ResolvedStore::IdentityProvider(s) => s.as_any(),
        }
    }
}

impl std::fmt::Debug for ResolvedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedStore")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

/// Bindings read from configuration plus the registry they resolve against
///
/// Immutable once built. Every store getter constructs a fresh instance; an
/// unset binding yields the kind's built-in store, and a binding that cannot
/// be resolved logs one error and yields `None`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use appmgt_core::logging::NoOpLogger;
/// use appmgt_core::registry::ProviderRegistry;
/// use appmgt_core::source::MemoryConfigSource;
/// use appmgt_core::system::SystemConfig;
///
/// let config = SystemConfig::load(
///     &MemoryConfigSource::new(),
///     Arc::new(ProviderRegistry::with_builtins()),
///     Arc::new(NoOpLogger::new()),
/// );
/// assert!(config.get_application_store().is_some());
/// assert_eq!(config.get_claim_namespace(), "http://wso2.org/claims");
/// ```
pub struct SystemConfig {
    bindings: ProviderBindings,
    registry: Arc<ProviderRegistry>,
    logger: SharedLogger,
}

impl SystemConfig {
    /// Build from a configuration source
    pub fn load(
        source: &dyn ConfigSource,
        registry: Arc<ProviderRegistry>,
        logger: SharedLogger,
    ) -> Self {
        let bindings = load_bindings(source, logger.as_ref());
        for binding in bindings.bindings() {
            logger.debug_fmt(format_args!(
                "{} resolves to '{}'{}",
                binding.kind.config_element(),
                binding.effective(),
                if binding.is_configured() { "" } else { " (default)" }
            ));
        }
        Self::from_bindings(bindings, registry, logger)
    }

    /// Build from bindings that were obtained some other way
    pub fn from_bindings(
        bindings: ProviderBindings,
        registry: Arc<ProviderRegistry>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            bindings,
            registry,
            logger,
        }
    }

    /// One binding per kind, in [`ProviderKind::ALL`] order
    pub fn bindings(&self) -> Vec<ProviderBinding> {
        self.bindings.bindings()
    }

    pub fn namespace_binding(&self) -> NamespaceBinding {
        self.bindings.namespace()
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Claim dialect for claim mappings
    pub fn get_claim_namespace(&self) -> &str {
        self.bindings
            .claim_dialect
            .as_deref()
            .unwrap_or(crate::types::DEFAULT_CLAIM_DIALECT)
    }

    pub fn try_application_store(&self) -> ResolveResult<Arc<dyn ApplicationStore>> {
        match self.bindings.get(ProviderKind::Application) {
            Some(name) => self.registry.create_application_store(name),
            None => Ok(Arc::new(DefaultApplicationStore::new())),
        }
    }

    pub fn try_oauth_client_store(&self) -> ResolveResult<Arc<dyn OAuthClientStore>> {
        match self.bindings.get(ProviderKind::OAuthClient) {
            Some(name) => self.registry.create_oauth_client_store(name),
            None => Ok(Arc::new(DefaultOAuthClientStore::new())),
        }
    }

    pub fn try_saml_client_store(&self) -> ResolveResult<Arc<dyn SamlClientStore>> {
        match self.bindings.get(ProviderKind::SamlClient) {
            Some(name) => self.registry.create_saml_client_store(name),
            None => Ok(Arc::new(DefaultSamlClientStore::new())),
        }
    }

    pub fn try_identity_provider_store(&self) -> ResolveResult<Arc<dyn IdentityProviderStore>> {
        match self.bindings.get(ProviderKind::IdentityProvider) {
            Some(name) => self.registry.create_identity_provider_store(name),
            None => Ok(Arc::new(DefaultIdentityProviderStore::new())),
        }
    }

    /// Any kind, without logging
    pub fn try_resolve(&self, kind: ProviderKind) -> ResolveResult<ResolvedStore> {
        Ok(match kind {
            ProviderKind::Application => ResolvedStore::Application(self.try_application_store()?),
            ProviderKind::OAuthClient => ResolvedStore::OAuthClient(self.try_oauth_client_store()?),
            ProviderKind::SamlClient => ResolvedStore::SamlClient(self.try_saml_client_store()?),
            ProviderKind::IdentityProvider => {
                ResolvedStore::IdentityProvider(self.try_identity_provider_store()?)
            }
        })
    }

    pub fn get_application_store(&self) -> Option<Arc<dyn ApplicationStore>> {
        self.logged(ProviderKind::Application, self.try_application_store())
    }

    pub fn get_oauth_client_store(&self) -> Option<Arc<dyn OAuthClientStore>> {
        self.logged(ProviderKind::OAuthClient, self.try_oauth_client_store())
    }

    pub fn get_saml_client_store(&self) -> Option<Arc<dyn SamlClientStore>> {
        self.logged(ProviderKind::SamlClient, self.try_saml_client_store())
    }

    pub fn get_identity_provider_store(&self) -> Option<Arc<dyn IdentityProviderStore>> {
        self.logged(ProviderKind::IdentityProvider, self.try_identity_provider_store())
    }

    /// Any kind; failures are logged and reported as `None`
    pub fn resolve(&self, kind: ProviderKind) -> Option<ResolvedStore> {
        self.logged(kind, self.try_resolve(kind))
    }

    fn logged<T>(&self, kind: ProviderKind, result: ResolveResult<T>) -> Option<T> {
        match result {
            Ok(store) => Some(store),
            Err(e) => {
                self.logger.error_fmt(format_args!(
                    "Error while instantiating the {} '{}': {}",
                    kind.config_element(),
                    e.identifier(),
                    e
                ));
                None
            }
        }
    }
}

impl std::fmt::Debug for SystemConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemConfig")
            .field("bindings", &self.bindings)
            .finish()
    }
}
