//! System configuration for application management
//!
//! - `loader`: reads the `ServiceProvidersManagement` section into bindings
//! - `SystemConfig`: resolved bindings plus the store factories built on them
//! - `SystemConfigHolder`: gated, build-once access to a `SystemConfig`
//! - `global`: optional process-wide holder

mod loader;
mod config;
mod holder;
pub mod global;

pub use loader::{load_bindings, CLAIM_DIALECT_ELEMENT, SECTION};
pub use config::{ResolvedStore, SystemConfig};
pub use holder::SystemConfigHolder;
