//! The four pluggable store roles

use std::fmt;

/// A pluggable persistence role whose implementation is chosen by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderKind {
    /// Service provider (application) store
    Application,
    /// OAuth / OpenID Connect client store
    OAuthClient,
    /// SAML client store
    SamlClient,
    /// System identity provider store
    IdentityProvider,
}

impl ProviderKind {
    /// All kinds, in configuration order
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Application,
        ProviderKind::OAuthClient,
        ProviderKind::SamlClient,
        ProviderKind::IdentityProvider,
    ];

    /// Child element carrying this kind's implementation identifier
    pub fn config_element(&self) -> &'static str {
        match self {
            ProviderKind::Application => "ApplicationDAO",
            ProviderKind::OAuthClient => "OAuthOIDCClientDAO",
            ProviderKind::SamlClient => "SAMLClientDAO",
            ProviderKind::IdentityProvider => "SystemIDPDAO",
        }
    }

    /// Identifier of the built-in implementation used when nothing is configured
    pub fn default_type(&self) -> &'static str {
        match self {
            ProviderKind::Application => "default-application-store",
            ProviderKind::OAuthClient => "default-oauth-client-store",
            ProviderKind::SamlClient => "default-saml-client-store",
            ProviderKind::IdentityProvider => "default-identity-provider-store",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Application => "application",
            ProviderKind::OAuthClient => "oauth-client",
            ProviderKind::SamlClient => "saml-client",
            ProviderKind::IdentityProvider => "identity-provider",
        }
    }

}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_elements() {
        let elements: Vec<_> = ProviderKind::ALL.iter().map(|k| k.config_element()).collect();
        assert_eq!(
            elements,
            vec!["ApplicationDAO", "OAuthOIDCClientDAO", "SAMLClientDAO", "SystemIDPDAO"]
        );
    }

}
