//! # Mesh Errors
//!
//! The error taxonomy is deliberately thin. `broadcast` is fire-and-forget
//! and cannot fail; `subscribe` always succeeds; an envelope that matches no
//! subscriber is dropped, not reported. The only error surface left is a
//! handler rejecting a delivered envelope.

/// Errors surfaced by message handling.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// A subscriber's handler failed on a delivered envelope. The link that
    /// delivered it logs the failure and drops the envelope; the link itself
    /// stays up.
    #[error("handler error: {0}")]
    Handler(Box<dyn std::error::Error + Send + Sync>),
}

impl MeshError {
    /// Wraps any endpoint-specific error into the handler variant.
    pub fn handler(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        MeshError::Handler(error.into())
    }
}
