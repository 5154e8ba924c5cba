//! Payment domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use santri_shared::types::{InvoiceId, PaymentId};
use serde::{Deserialize, Serialize};

use crate::billing::Invoice;

/// One settlement event covering one or more invoices (pembayaran).
///
/// The invoice set is immutable once created; the `deposited_to_cash` flag
/// is the only field that may change afterwards (set by the cash ledger's
/// deposit operation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier, assigned by the store.
    pub id: PaymentId,
    /// The invoices this payment settled (non-empty).
    pub invoice_ids: Vec<InvoiceId>,
    /// Date of the payment.
    pub date: NaiveDate,
    /// Payment method (e.g. "tunai", "transfer").
    pub method: String,
    /// Name of the person who received the payment.
    pub received_by: String,
    /// Free-form note.
    pub note: String,
    /// Sum of the settled invoices' amounts, computed at settlement time.
    pub total_amount: Decimal,
    /// Whether this payment has been deposited into the cash ledger.
    pub deposited_to_cash: bool,
}

/// Caller-supplied metadata for a settlement.
#[derive(Debug, Clone)]
pub struct PaymentInput {
    /// Date of the payment.
    pub date: NaiveDate,
    /// Payment method.
    pub method: String,
    /// Name of the person who received the payment.
    pub received_by: String,
    /// Free-form note.
    pub note: String,
}

/// Result of a settlement: the created payment and the invoices it flipped
/// to paid.
#[derive(Debug, Clone)]
pub struct SettlementOutcome {
    /// The created payment, with assigned identifier.
    pub payment: Payment,
    /// The updated invoices, now paid.
    pub invoices: Vec<Invoice>,
}
