//! Wallet repository: the per-student prepaid balance ledger.

use chrono::Utc;
use rust_decimal::Decimal;
use santri_core::wallet::{WalletEntry, WalletEntryKind, WalletError, WalletLedger, WalletOutcome};
use santri_shared::types::StudentId;
use tracing::info;

use crate::store::LedgerStore;

/// Repository for student wallet operations.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    store: LedgerStore,
}

impl WalletRepository {
    /// Creates a new wallet repository.
    #[must_use]
    pub const fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Applies one deposit or withdrawal to a student's wallet.
    ///
    /// The ledger entry and the materialized balance commit together; a
    /// rejected withdrawal writes nothing. A student with no wallet history
    /// starts from a balance of zero.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` when `amount` is not strictly positive
    /// - `InsufficientBalance` when a withdrawal exceeds the balance
    /// - `Store` on storage failure
    pub async fn apply_entry(
        &self,
        student_id: StudentId,
        kind: WalletEntryKind,
        amount: Decimal,
        note: String,
    ) -> Result<WalletOutcome, WalletError> {
        let timestamp = Utc::now();
        let outcome = self
            .store
            .transaction(|state| {
                let current = state.wallet_balance(student_id);
                let balance = WalletLedger::next_balance(current, kind, amount)?;
                let entry = state.insert_wallet_entry(
                    student_id, timestamp, kind, amount, note, balance,
                );
                state.upsert_wallet_balance(student_id, balance);
                Ok(WalletOutcome { entry, balance })
            })
            .await?;

        info!(
            student_id = %student_id,
            kind = ?kind,
            amount = %amount,
            balance = %outcome.balance,
            "wallet entry applied"
        );
        Ok(outcome)
    }

    /// Current wallet balance of a student (zero if no history).
    pub async fn balance_of(&self, student_id: StudentId) -> Decimal {
        self.store
            .read(|state| state.wallet_balance(student_id))
            .await
    }

    /// Wallet history of a student, ordered by id.
    pub async fn history(&self, student_id: StudentId) -> Vec<WalletEntry> {
        self.store
            .read(|state| state.wallet_entries(student_id).cloned().collect())
            .await
    }
}
