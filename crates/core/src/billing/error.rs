//! Billing error types.

use thiserror::Error;

/// Errors that can occur during invoice generation.
#[derive(Debug, Error)]
pub enum BillingError {
    /// Storage error while persisting a generation pass.
    #[error("Storage error: {0}")]
    Store(String),
}

impl BillingError {
    /// Returns the error code for display-layer mapping.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns true if the whole operation may be retried as-is.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
