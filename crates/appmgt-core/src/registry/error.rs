//! Resolution errors

use thiserror::Error;

use crate::types::ProviderKind;

/// Why a configured identifier could not be turned into a store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no {kind} store registered as '{identifier}'")]
    UnknownIdentifier {
        kind: ProviderKind,
        identifier: String,
    },

    #[error("'{identifier}' is not a {kind} store (registered as {registered_as:?})")]
    CapabilityMismatch {
        kind: ProviderKind,
        identifier: String,
        registered_as: Vec<ProviderKind>,
    },

    #[error("failed to construct {kind} store '{identifier}': {message}")]
    Construction {
        kind: ProviderKind,
        identifier: String,
        message: String,
    },
}

impl ResolveError {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ResolveError::UnknownIdentifier { kind, .. }
            | ResolveError::CapabilityMismatch { kind, .. }
            | ResolveError::Construction { kind, .. } => *kind,
        }
    }

    /// The configured identifier that failed
    pub fn identifier(&self) -> &str {
        match self {
            ResolveError::UnknownIdentifier { identifier, .. }
            | ResolveError::CapabilityMismatch { identifier, .. }
            | ResolveError::Construction { identifier, .. } => identifier,
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
