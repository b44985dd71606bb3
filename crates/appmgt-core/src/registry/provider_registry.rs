//! Registry of store constructors for all four roles

use std::sync::Arc;

use super::error::{ResolveError, ResolveResult};
use super::factory::{FactoryTable, StoreDefinition};
use crate::stores::{
    ApplicationStore, DefaultApplicationStore, DefaultIdentityProviderStore,
    DefaultOAuthClientStore, DefaultSamlClientStore, IdentityProviderStore, OAuthClientStore,
    SamlClientStore,
};
use crate::types::ProviderKind;

/// Constructors for each store role, keyed by configured identifier
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use appmgt_core::registry::ProviderRegistry;
/// use appmgt_core::stores::DefaultApplicationStore;
/// use appmgt_core::types::ProviderKind;
///
/// let mut registry = ProviderRegistry::with_builtins();
/// registry.register_application_store("cached", "Cached application store", || {
///     Ok(Arc::new(DefaultApplicationStore::new()))
/// });
/// assert!(registry.has(ProviderKind::Application, "cached"));
/// ```
pub struct ProviderRegistry {
    applications: FactoryTable<dyn ApplicationStore>,
    oauth_clients: FactoryTable<dyn OAuthClientStore>,
    saml_clients: FactoryTable<dyn SamlClientStore>,
    identity_providers: FactoryTable<dyn IdentityProviderStore>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("ProviderRegistry");
        for kind in ProviderKind::ALL {
            s.field(kind.as_str(), &self.list(kind));
        }
        s.finish()
    }
}

impl ProviderRegistry {
    /// Registry with nothing registered
    pub fn new() -> Self {
        Self {
            applications: FactoryTable::new(),
            oauth_clients: FactoryTable::new(),
            saml_clients: FactoryTable::new(),
            identity_providers: FactoryTable::new(),
        }
    }

    /// Registry with the default store of every role registered under its
    /// [`ProviderKind::default_type`] identifier
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_application_store(
            ProviderKind::Application.default_type(),
            "Built-in application store",
            || Ok(Arc::new(DefaultApplicationStore::new())),
        );
        registry.register_oauth_client_store(
            ProviderKind::OAuthClient.default_type(),
            "Built-in OAuth/OIDC client store",
            || Ok(Arc::new(DefaultOAuthClientStore::new())),
        );
        registry.register_saml_client_store(
            ProviderKind::SamlClient.default_type(),
            "Built-in SAML client store",
            || Ok(Arc::new(DefaultSamlClientStore::new())),
        );
        registry.register_identity_provider_store(
            ProviderKind::IdentityProvider.default_type(),
            "Built-in identity provider store",
            || Ok(Arc::new(DefaultIdentityProviderStore::new())),
        );
        registry
    }

    /// Register an application store; an existing identifier is replaced
    pub fn register_application_store<F>(&mut self, name: &str, description: &str, factory: F)
    where
        F: Fn() -> Result<Arc<dyn ApplicationStore>, String> + Send + Sync + 'static,
    {
        self.applications.insert(StoreDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory: Box::new(factory),
        });
    }

    pub fn register_oauth_client_store<F>(&mut self, name: &str, description: &str, factory: F)
    where
        F: Fn() -> Result<Arc<dyn OAuthClientStore>, String> + Send + Sync + 'static,
    {
        self.oauth_clients.insert(StoreDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory: Box::new(factory),
        });
    }

    pub fn register_saml_client_store<F>(&mut self, name: &str, description: &str, factory: F)
    where
        F: Fn() -> Result<Arc<dyn SamlClientStore>, String> + Send + Sync + 'static,
    {
        self.saml_clients.insert(StoreDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory: Box::new(factory),
        });
    }

    pub fn register_identity_provider_store<F>(&mut self, name: &str, description: &str, factory: F)
    where
        F: Fn() -> Result<Arc<dyn IdentityProviderStore>, String> + Send + Sync + 'static,
    {
        self.identity_providers.insert(StoreDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory: Box::new(factory),
        });
    }

    pub fn create_application_store(&self, name: &str) -> ResolveResult<Arc<dyn ApplicationStore>> {
        self.create(ProviderKind::Application, &self.applications, name)
    }

    pub fn create_oauth_client_store(&self, name: &str) -> ResolveResult<Arc<dyn OAuthClientStore>> {
        self.create(ProviderKind::OAuthClient, &self.oauth_clients, name)
    }

    pub fn create_saml_client_store(&self, name: &str) -> ResolveResult<Arc<dyn SamlClientStore>> {
        self.create(ProviderKind::SamlClient, &self.saml_clients, name)
    }

    pub fn create_identity_provider_store(
        &self,
        name: &str,
    ) -> ResolveResult<Arc<dyn IdentityProviderStore>> {
        self.create(ProviderKind::IdentityProvider, &self.identity_providers, name)
    }

    /// Check if `name` is registered for `kind`
    pub fn has(&self, kind: ProviderKind, name: &str) -> bool {
        match kind {
            ProviderKind::Application => self.applications.contains(name),
            ProviderKind::OAuthClient => self.oauth_clients.contains(name),
            ProviderKind::SamlClient => self.saml_clients.contains(name),
            ProviderKind::IdentityProvider => self.identity_providers.contains(name),
        }
    }

    /// Every kind `name` is registered for
    pub fn kinds_for(&self, name: &str) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|k| self.has(*k, name))
            .collect()
    }

    /// `(name, description)` of every store registered for `kind`
    pub fn list(&self, kind: ProviderKind) -> Vec<(String, String)> {
        match kind {
            ProviderKind::Application => self.applications.list(),
            ProviderKind::OAuthClient => self.oauth_clients.list(),
            ProviderKind::SamlClient => self.saml_clients.list(),
            ProviderKind::IdentityProvider => self.identity_providers.list(),
        }
    }

    /// Remove a registration (mainly for testing)
    pub fn unregister(&mut self, kind: ProviderKind, name: &str) -> bool {
        match kind {
            ProviderKind::Application => self.applications.remove(name),
            ProviderKind::OAuthClient => self.oauth_clients.remove(name),
            ProviderKind::SamlClient => self.saml_clients.remove(name),
            ProviderKind::IdentityProvider => self.identity_providers.remove(name),
        }
    }

    fn create<T: ?Sized>(
        &self,
        kind: ProviderKind,
        table: &FactoryTable<T>,
        name: &str,
    ) -> ResolveResult<Arc<T>> {
        match table.get(name) {
            Some(def) => (def.factory)().map_err(|message| ResolveError::Construction {
                kind,
                identifier: name.to_string(),
                message,
            }),
            None => {
                let registered_as = self.kinds_for(name);
                if registered_as.is_empty() {
                    Err(ResolveError::UnknownIdentifier {
                        kind,
                        identifier: name.to_string(),
                    })
                } else {
                    Err(ResolveError::CapabilityMismatch {
                        kind,
                        identifier: name.to_string(),
                        registered_as,
                    })
                }
            }
        }
    }
}
