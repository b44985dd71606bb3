//! Binding table populated from the configuration section

use super::kind::ProviderKind;

/// Claim dialect used when none is configured
pub const DEFAULT_CLAIM_DIALECT: &str = "http://wso2.org/claims";

/// Association between a kind and its configured implementation identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderBinding {
    pub kind: ProviderKind,
    /// Trimmed, non-empty identifier, or `None` when never configured
    pub configured: Option<String>,
    pub default_type: &'static str,
}

impl ProviderBinding {
    /// Identifier that resolution will actually use
    pub fn effective(&self) -> &str {
        self.configured.as_deref().unwrap_or(self.default_type)
    }

    pub fn is_configured(&self) -> bool {
        self.configured.is_some()
    }
}

/// Claim namespace binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBinding {
    pub configured: Option<String>,
    pub default: &'static str,
}

impl NamespaceBinding {
    pub fn value(&self) -> &str {
        self.configured.as_deref().unwrap_or(self.default)
    }
}

/// The five optional values read from `ServiceProvidersManagement`
///
/// Defaults are applied at resolution time, never stored here, so an unset
/// binding stays distinguishable from one that names the default explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderBindings {
    pub application: Option<String>,
    pub oauth_client: Option<String>,
    pub saml_client: Option<String>,
    pub identity_provider: Option<String>,
    pub claim_dialect: Option<String>,
}

impl ProviderBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configured identifier for `kind`, if any
    pub fn get(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::Application => self.application.as_deref(),
            ProviderKind::OAuthClient => self.oauth_client.as_deref(),
            ProviderKind::SamlClient => self.saml_client.as_deref(),
            ProviderKind::IdentityProvider => self.identity_provider.as_deref(),
        }
    }

    pub fn set(&mut self, kind: ProviderKind, identifier: impl Into<String>) {
        let slot = match kind {
            ProviderKind::Application => &mut self.application,
            ProviderKind::OAuthClient => &mut self.oauth_client,
            ProviderKind::SamlClient => &mut self.saml_client,
            ProviderKind::IdentityProvider => &mut self.identity_provider,
        };
        *slot = Some(identifier.into());
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, kind: ProviderKind, identifier: impl Into<String>) -> Self {
        self.set(kind, identifier);
        self
    }

    pub fn with_claim_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.claim_dialect = Some(dialect.into());
        self
    }

    pub fn binding(&self, kind: ProviderKind) -> ProviderBinding {
        ProviderBinding {
            kind,
            configured: self.get(kind).map(str::to_string),
            default_type: kind.default_type(),
        }
    }

    /// One binding per kind, in [`ProviderKind::ALL`] order
    pub fn bindings(&self) -> Vec<ProviderBinding> {
        ProviderKind::ALL.iter().map(|k| self.binding(*k)).collect()
    }

    pub fn namespace(&self) -> NamespaceBinding {
        NamespaceBinding {
            configured: self.claim_dialect.clone(),
            default: DEFAULT_CLAIM_DIALECT,
        }
    }

    /// True when nothing at all was configured
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
