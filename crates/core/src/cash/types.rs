//! Cash ledger domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use santri_shared::types::{CashEntryId, PaymentId};
use serde::{Deserialize, Serialize};

use crate::payment::Payment;

/// Category assigned to cash entries created by the collected-payments
/// deposit operation.
pub const DEPOSIT_CATEGORY: &str = "setoran-pembayaran-santri";

/// Direction of a cash ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashFlow {
    /// Money entering the cash account.
    Inflow,
    /// Money leaving the cash account.
    Outflow,
}

impl CashFlow {
    /// Returns the signed delta this entry applies to the cash balance.
    #[must_use]
    pub fn signed_amount(self, amount: Decimal) -> Decimal {
        match self {
            Self::Inflow => amount,
            Self::Outflow => -amount,
        }
    }
}

/// One immutable entry in the institution's cash ledger (transaksi kas).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashEntry {
    /// Unique identifier, assigned by the store. Insertion order by id
    /// defines the running-balance chain.
    pub id: CashEntryId,
    /// Business date of the entry.
    pub date: NaiveDate,
    /// Server-assigned timestamp.
    pub timestamp: DateTime<Utc>,
    /// Inflow or outflow.
    pub flow: CashFlow,
    /// Entry category (e.g. "operasional", [`DEPOSIT_CATEGORY`]).
    pub category: String,
    /// Free-form description.
    pub description: String,
    /// Amount moved (always positive).
    pub amount: Decimal,
    /// Cash balance immediately after this entry. May be negative.
    pub balance_after: Decimal,
    /// Name of the responsible party.
    pub recorded_by: String,
}

/// Caller-supplied fields for a direct cash entry.
#[derive(Debug, Clone)]
pub struct CashEntryInput {
    /// Business date of the entry.
    pub date: NaiveDate,
    /// Inflow or outflow.
    pub flow: CashFlow,
    /// Entry category.
    pub category: String,
    /// Free-form description.
    pub description: String,
    /// Amount moved (must be positive).
    pub amount: Decimal,
    /// Name of the responsible party.
    pub recorded_by: String,
}

/// Caller-supplied fields for depositing collected payments into cash
/// (setor ke kas).
#[derive(Debug, Clone)]
pub struct DepositInput {
    /// The payments being deposited (non-empty).
    pub payment_ids: Vec<PaymentId>,
    /// Total amount deposited; verified against the referenced payments
    /// unless verification is disabled by policy.
    pub total_amount: Decimal,
    /// Business date of the deposit.
    pub date: NaiveDate,
    /// Name of the responsible party.
    pub recorded_by: String,
    /// Free-form note, used as the cash entry description.
    pub note: String,
}

/// Result of a direct cash entry.
#[derive(Debug, Clone)]
pub struct CashOutcome {
    /// The appended ledger entry.
    pub entry: CashEntry,
    /// The new cash balance.
    pub balance: Decimal,
}

/// Result of a collected-payments deposit.
#[derive(Debug, Clone)]
pub struct DepositOutcome {
    /// The appended inflow entry.
    pub entry: CashEntry,
    /// The payments that were flagged as deposited.
    pub payments: Vec<Payment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_signed_amount() {
        assert_eq!(CashFlow::Inflow.signed_amount(dec!(100_000)), dec!(100_000));
        assert_eq!(
            CashFlow::Outflow.signed_amount(dec!(100_000)),
            dec!(-100_000)
        );
    }
}
