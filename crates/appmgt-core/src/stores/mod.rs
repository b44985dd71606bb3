//! Store capabilities resolved by the system configuration
//!
//! The persistence logic lives elsewhere; this crate only needs each role as a
//! trait object it can construct and hand out.

mod traits;
mod defaults;

pub use traits::{
    ApplicationStore, IdentityProviderStore, OAuthClientStore, SamlClientStore, Store,
};
pub use defaults::{
    DefaultApplicationStore, DefaultIdentityProviderStore, DefaultOAuthClientStore,
    DefaultSamlClientStore,
};
