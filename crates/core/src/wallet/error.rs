//! Wallet error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur on the student wallet ledger.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Entry amounts must be strictly positive.
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    /// A withdrawal may not exceed the current balance.
    ///
    /// The message carries the available balance for user display.
    #[error("Insufficient balance: available {available}")]
    InsufficientBalance {
        /// The student's current balance.
        available: Decimal,
    },

    /// Storage error during the wallet transaction.
    #[error("Storage error: {0}")]
    Store(String),
}

impl WalletError {
    /// Returns the error code for display-layer mapping.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns true if the whole operation may be retried as-is.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
