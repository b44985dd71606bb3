//! Built-in store implementations used when nothing is configured

use std::any::Any;

use super::traits::{
    ApplicationStore, IdentityProviderStore, OAuthClientStore, SamlClientStore, Store,
};
use crate::types::ProviderKind;

macro_rules! default_store {
    ($(#[$meta:meta])* $name:ident, $role:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            pub fn new() -> Self {
                Self
            }
        }

        impl Store for $name {
            fn name(&self) -> &str {
                $kind.default_type()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl $role for $name {}
    };
}

default_store!(
    /// Default service provider store
    DefaultApplicationStore,
    ApplicationStore,
    ProviderKind::Application
);

default_store!(
    /// Default OAuth / OIDC client store
    DefaultOAuthClientStore,
    OAuthClientStore,
    ProviderKind::OAuthClient
);

default_store!(
    /// Default SAML client store
    DefaultSamlClientStore,
    SamlClientStore,
    ProviderKind::SamlClient
);

default_store!(
    /// Default system identity provider store
    DefaultIdentityProviderStore,
    IdentityProviderStore,
    ProviderKind::IdentityProvider
);
