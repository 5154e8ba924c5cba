//! Student prepaid wallet ledger.
//!
//! This module implements the per-student prepaid balance (saldo santri):
//! - Balance and ledger-entry domain types
//! - Running-balance arithmetic with the non-negativity rule
//! - Error types for wallet operations

pub mod error;
pub mod ledger;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use error::WalletError;
pub use ledger::WalletLedger;
pub use types::{WalletBalance, WalletEntry, WalletEntryKind, WalletOutcome};
