//! AppMgt Core
//!
//! Decides, once per process, which implementation backs each pluggable store
//! used by application management, and which claim dialect attribute mapping
//! defaults to.
//!
//! Configuration lives in the `ServiceProvidersManagement` section:
//!
//! | Element | Meaning |
//! |---|---|
//! | `ApplicationDAO` | application store identifier |
//! | `OAuthOIDCClientDAO` | OAuth/OIDC client store identifier |
//! | `SAMLClientDAO` | SAML client store identifier |
//! | `SystemIDPDAO` | identity provider store identifier |
//! | `ClaimDialect` | default claim dialect URI |
//!
//! Identifiers are looked up in a [`ProviderRegistry`]; unset elements fall
//! back to the built-in stores and to `http://wso2.org/claims`.
//!
//! ```rust
//! use std::sync::Arc;
//! use appmgt_core::{MemoryConfigSource, ProviderRegistry, SystemConfigHolder};
//! use appmgt_core::stores::DefaultOAuthClientStore;
//!
//! let mut registry = ProviderRegistry::with_builtins();
//! registry.register_oauth_client_store("cached-oauth", "OAuth store with a cache", || {
//!     Ok(Arc::new(DefaultOAuthClientStore::new()))
//! });
//!
//! let holder = SystemConfigHolder::new(Arc::new(MemoryConfigSource::new()))
//!     .with_registry(registry);
//! let config = holder.get_instance()?;
//! let store = config.get_oauth_client_store();
//! assert!(store.is_some());
//! # Ok::<(), appmgt_core::AccessError>(())
//! ```

pub mod types;
pub mod logging;
pub mod auth;
pub mod source;
pub mod stores;
pub mod registry;
pub mod system;

// Re-export commonly used types
pub use types::{ProviderBinding, ProviderBindings, ProviderKind, DEFAULT_CLAIM_DIALECT};

pub use logging::{ConsoleLogger, Logger, MemoryLogger, NoOpLogger, SharedLogger};

pub use auth::{AccessError, AccessResult, AllowAll, AuthorizationGate, DenyAll};

pub use source::{
    ConfigNode, ConfigSource, FileConfigSource, MemoryConfigSource, QualifiedName,
    IDENTITY_NAMESPACE,
};

pub use stores::{ApplicationStore, IdentityProviderStore, OAuthClientStore, SamlClientStore, Store};

pub use registry::{ProviderRegistry, ResolveError, ResolveResult};

pub use system::{ResolvedStore, SystemConfig, SystemConfigHolder};
