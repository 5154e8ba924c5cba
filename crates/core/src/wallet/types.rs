//! Student wallet domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use santri_shared::types::{StudentId, WalletEntryId};
use serde::{Deserialize, Serialize};

/// Kind of wallet ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletEntryKind {
    /// Money added to the student's prepaid balance.
    Deposit,
    /// Money taken from the student's prepaid balance.
    Withdrawal,
}

impl WalletEntryKind {
    /// Returns the signed delta this entry applies to the balance.
    #[must_use]
    pub fn signed_amount(self, amount: Decimal) -> Decimal {
        match self {
            Self::Deposit => amount,
            Self::Withdrawal => -amount,
        }
    }
}

/// Materialized prepaid balance of one student (saldo santri).
///
/// Created implicitly at zero on the student's first wallet entry; the
/// balance is always the sum of the student's entry deltas and never goes
/// negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    /// The student this balance belongs to.
    pub student_id: StudentId,
    /// Current balance in whole rupiah (never negative).
    pub balance: Decimal,
}

impl WalletBalance {
    /// Returns a zero balance for a student with no wallet history.
    #[must_use]
    pub fn zero(student_id: StudentId) -> Self {
        Self {
            student_id,
            balance: Decimal::ZERO,
        }
    }
}

/// One immutable wallet ledger entry (transaksi saldo).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletEntry {
    /// Unique identifier, assigned by the store.
    pub id: WalletEntryId,
    /// The student whose balance this entry changed.
    pub student_id: StudentId,
    /// Server-assigned timestamp.
    pub timestamp: DateTime<Utc>,
    /// Deposit or withdrawal.
    pub kind: WalletEntryKind,
    /// Amount moved (always positive).
    pub amount: Decimal,
    /// Free-form note.
    pub note: String,
    /// Balance immediately after this entry was applied.
    pub balance_after: Decimal,
}

/// Result of applying a wallet entry.
#[derive(Debug, Clone)]
pub struct WalletOutcome {
    /// The appended ledger entry.
    pub entry: WalletEntry,
    /// The student's new balance.
    pub balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_signed_amount() {
        assert_eq!(
            WalletEntryKind::Deposit.signed_amount(dec!(50_000)),
            dec!(50_000)
        );
        assert_eq!(
            WalletEntryKind::Withdrawal.signed_amount(dec!(50_000)),
            dec!(-50_000)
        );
    }

    #[test]
    fn test_zero_balance() {
        let balance = WalletBalance::zero(StudentId::from_raw(1));
        assert_eq!(balance.balance, Decimal::ZERO);
    }
}
