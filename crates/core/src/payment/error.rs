//! Payment error types.

use santri_shared::types::InvoiceId;
use thiserror::Error;

/// Errors that can occur while settling invoices.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// A settlement must reference at least one invoice.
    #[error("A payment must settle at least one invoice")]
    NoInvoicesSelected,

    /// The same invoice appears more than once in the settlement.
    #[error("Invoice {0} is listed more than once")]
    DuplicateInvoice(InvoiceId),

    /// A referenced invoice does not exist.
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),

    /// A referenced invoice has already been paid.
    #[error("Invoice {0} has already been paid")]
    InvoiceAlreadyPaid(InvoiceId),

    /// Storage error during the settlement transaction.
    #[error("Storage error: {0}")]
    Store(String),
}

impl PaymentError {
    /// Returns the error code for display-layer mapping.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoInvoicesSelected => "NO_INVOICES_SELECTED",
            Self::DuplicateInvoice(_) => "DUPLICATE_INVOICE",
            Self::InvoiceNotFound(_) => "INVOICE_NOT_FOUND",
            Self::InvoiceAlreadyPaid(_) => "INVOICE_ALREADY_PAID",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns true if the whole operation may be retried as-is.
    ///
    /// Conflict errors require the caller to refresh its view first.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
