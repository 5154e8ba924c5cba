//! Cash repository: the institution cash ledger and payment deposits.

use chrono::Utc;
use rust_decimal::Decimal;
use santri_core::cash::{
    CashEntry, CashEntryInput, CashError, CashFlow, CashLedger, CashOutcome, DepositInput,
    DepositOutcome, PaymentForDeposit, DEPOSIT_CATEGORY,
};
use santri_shared::config::PolicyConfig;
use tracing::info;

use crate::store::LedgerStore;

/// Repository for cash ledger operations.
#[derive(Debug, Clone)]
pub struct CashRepository {
    store: LedgerStore,
    policy: PolicyConfig,
}

impl CashRepository {
    /// Creates a new cash repository.
    #[must_use]
    pub const fn new(store: LedgerStore, policy: PolicyConfig) -> Self {
        Self { store, policy }
    }

    /// Appends one direct entry to the cash ledger.
    ///
    /// The balance chains from the most recent entry (zero for an empty
    /// ledger) and is allowed to go negative.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` when the amount is not strictly positive
    /// - `Store` on storage failure
    pub async fn apply_entry(&self, input: CashEntryInput) -> Result<CashOutcome, CashError> {
        let timestamp = Utc::now();
        let outcome = self
            .store
            .transaction(|state| {
                let previous = state.cash_balance();
                let balance = CashLedger::next_balance(previous, input.flow, input.amount)?;
                let entry = state.insert_cash_entry(
                    input.date,
                    timestamp,
                    input.flow,
                    input.category.clone(),
                    input.description.clone(),
                    input.amount,
                    balance,
                    input.recorded_by.clone(),
                );
                Ok(CashOutcome { entry, balance })
            })
            .await?;

        info!(
            flow = ?outcome.entry.flow,
            amount = %outcome.entry.amount,
            balance = %outcome.balance,
            "cash entry applied"
        );
        Ok(outcome)
    }

    /// Deposits a batch of collected payments into the cash ledger
    /// (setor ke kas).
    ///
    /// Atomically appends one inflow entry with category
    /// [`DEPOSIT_CATEGORY`] and flags every referenced payment as
    /// deposited. By default the caller-supplied total is verified against
    /// the referenced payments; the `verify_deposit_total` policy knob
    /// accepts the caller-supplied total as given.
    ///
    /// # Errors
    ///
    /// - `NoPaymentsSelected` / `DuplicatePayment` / `InvalidAmount` before
    ///   any lookup
    /// - `PaymentNotFound` / `PaymentAlreadyDeposited` /
    ///   `DepositTotalMismatch` on stale or inconsistent caller views
    /// - `Store` on storage failure
    pub async fn deposit_collected(
        &self,
        input: DepositInput,
    ) -> Result<DepositOutcome, CashError> {
        let timestamp = Utc::now();
        let verify_total = self.policy.verify_deposit_total;
        let outcome = self
            .store
            .transaction(|state| {
                CashLedger::validate_deposit(
                    &input,
                    |id| {
                        state.payment(id).map(|payment| PaymentForDeposit {
                            deposited: payment.deposited_to_cash,
                            total_amount: payment.total_amount,
                        })
                    },
                    verify_total,
                )?;

                let previous = state.cash_balance();
                let balance =
                    CashLedger::next_balance(previous, CashFlow::Inflow, input.total_amount)?;
                let entry = state.insert_cash_entry(
                    input.date,
                    timestamp,
                    CashFlow::Inflow,
                    DEPOSIT_CATEGORY.to_string(),
                    input.note.clone(),
                    input.total_amount,
                    balance,
                    input.recorded_by.clone(),
                );

                let payments = input
                    .payment_ids
                    .iter()
                    .map(|&id| {
                        state
                            .mark_payment_deposited(id)
                            .ok_or(CashError::PaymentNotFound(id))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(DepositOutcome { entry, payments })
            })
            .await?;

        info!(
            payments = outcome.payments.len(),
            amount = %outcome.entry.amount,
            balance = %outcome.entry.balance_after,
            "collected payments deposited to cash"
        );
        Ok(outcome)
    }

    /// Current cash balance (zero for an empty ledger).
    pub async fn balance(&self) -> Decimal {
        self.store.read(|state| state.cash_balance()).await
    }

    /// Full cash history, ordered by id.
    pub async fn history(&self) -> Vec<CashEntry> {
        self.store
            .read(|state| state.cash_entries().cloned().collect())
            .await
    }
}
