//! Cash ledger error types.

use rust_decimal::Decimal;
use santri_shared::types::PaymentId;
use thiserror::Error;

/// Errors that can occur on the cash ledger.
#[derive(Debug, Error)]
pub enum CashError {
    /// Entry amounts must be strictly positive.
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    /// A deposit must reference at least one payment.
    #[error("A deposit must reference at least one payment")]
    NoPaymentsSelected,

    /// The same payment appears more than once in the deposit.
    #[error("Payment {0} is listed more than once")]
    DuplicatePayment(PaymentId),

    /// A referenced payment does not exist.
    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    /// A referenced payment has already been deposited into cash.
    #[error("Payment {0} has already been deposited to cash")]
    PaymentAlreadyDeposited(PaymentId),

    /// The caller-supplied deposit total does not match the referenced
    /// payments.
    #[error("Deposit total mismatch: payments sum to {expected}, got {provided}")]
    DepositTotalMismatch {
        /// Sum of the referenced payments' amounts.
        expected: Decimal,
        /// The caller-supplied total.
        provided: Decimal,
    },

    /// Storage error during the cash transaction.
    #[error("Storage error: {0}")]
    Store(String),
}

impl CashError {
    /// Returns the error code for display-layer mapping.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::NoPaymentsSelected => "NO_PAYMENTS_SELECTED",
            Self::DuplicatePayment(_) => "DUPLICATE_PAYMENT",
            Self::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
            Self::PaymentAlreadyDeposited(_) => "PAYMENT_ALREADY_DEPOSITED",
            Self::DepositTotalMismatch { .. } => "DEPOSIT_TOTAL_MISMATCH",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns true if the whole operation may be retried as-is.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mismatch_display_carries_both_totals() {
        let err = CashError::DepositTotalMismatch {
            expected: dec!(150_000),
            provided: dec!(140_000),
        };
        assert_eq!(
            err.to_string(),
            "Deposit total mismatch: payments sum to 150000, got 140000"
        );
        assert_eq!(err.error_code(), "DEPOSIT_TOTAL_MISMATCH");
    }

    #[test]
    fn test_retryable() {
        assert!(CashError::Store("io".to_string()).is_retryable());
        assert!(!CashError::NoPaymentsSelected.is_retryable());
    }
}
