//! Core types for provider bindings

mod kind;
mod bindings;

pub use kind::ProviderKind;
pub use bindings::{
    NamespaceBinding, ProviderBinding, ProviderBindings, DEFAULT_CLAIM_DIALECT,
};
