//! Store capability traits

use std::any::Any;

/// Behaviour shared by every store implementation
pub trait Store: Any + Send + Sync {
    /// Identifier the implementation is registered under
    fn name(&self) -> &str;

    /// Access to the concrete type, e.g. for downcasting in hosts and tests
    fn as_any(&self) -> &dyn Any;
}

/// Persists service providers (applications)
pub trait ApplicationStore: Store {}

/// Persists OAuth / OpenID Connect client registrations
pub trait OAuthClientStore: Store {}

/// Persists SAML service provider registrations
pub trait SamlClientStore: Store {}

/// Reads the system identity providers
pub trait IdentityProviderStore: Store {}
