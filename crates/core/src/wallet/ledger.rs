//! Wallet running-balance rules.
//!
//! The wallet is an append-only per-student ledger with a materialized
//! balance. Every mutation computes the next balance from the current one;
//! a withdrawal that would drive the balance negative is rejected before
//! any write.

use rust_decimal::Decimal;

use super::error::WalletError;
use super::types::WalletEntryKind;

/// Pure balance arithmetic for the student wallet.
pub struct WalletLedger;

impl WalletLedger {
    /// Computes the balance after applying an entry.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` when `amount` is not strictly positive
    /// - `InsufficientBalance` when a withdrawal exceeds `current`
    pub fn next_balance(
        current: Decimal,
        kind: WalletEntryKind,
        amount: Decimal,
    ) -> Result<Decimal, WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::InvalidAmount(amount));
        }
        if kind == WalletEntryKind::Withdrawal && amount > current {
            return Err(WalletError::InsufficientBalance { available: current });
        }
        Ok(current + kind.signed_amount(amount))
    }
}
