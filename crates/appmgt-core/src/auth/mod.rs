//! Authorization gate evaluated before any configuration access
//!
//! The gate is opaque: it either lets the caller through or denies with a
//! reason. Hosts plug in whatever permission check they run.

use std::sync::Arc;

use thiserror::Error;

/// Access to the system configuration was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Access denied: {0}")]
    Denied(String),
}

impl AccessError {
    pub fn denied(reason: impl Into<String>) -> Self {
        Self::Denied(reason.into())
    }
}

pub type AccessResult<T> = Result<T, AccessError>;

/// Pass/fail check run on every configuration access
pub trait AuthorizationGate: Send + Sync {
    fn check(&self) -> AccessResult<()>;
}

/// Type alias for an Arc-wrapped gate
pub type SharedGate = Arc<dyn AuthorizationGate>;

impl<F> AuthorizationGate for F
where
    F: Fn() -> AccessResult<()> + Send + Sync,
{
    fn check(&self) -> AccessResult<()> {
        self()
    }
}

/// Gate that always passes
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AuthorizationGate for AllowAll {
    fn check(&self) -> AccessResult<()> {
        Ok(())
    }
}

/// Gate that always denies with a fixed reason
#[derive(Debug, Clone)]
pub struct DenyAll {
    reason: String,
}

impl DenyAll {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for DenyAll {
    fn default() -> Self {
        Self::new("configuration access is not permitted")
    }
}

impl AuthorizationGate for DenyAll {
    fn check(&self) -> AccessResult<()> {
        Err(AccessError::Denied(self.reason.clone()))
    }
}
