//! Registry of store constructors keyed by configured identifier
//!
//! Configuration names an implementation by identifier; the registry maps that
//! identifier to a constructor for the matching store trait. Trait objects give
//! the capability check, so an identifier registered for another role is
//! reported instead of constructed.

mod error;
mod factory;
mod provider_registry;

pub use error::{ResolveError, ResolveResult};
pub use factory::{StoreDefinition, StoreFactory};
pub use provider_registry::ProviderRegistry;
