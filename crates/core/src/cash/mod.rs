//! Institution cash ledger.
//!
//! This module implements the general cash account (kas):
//! - Cash entry domain types and deposit inputs
//! - Running-balance arithmetic (overdraft permitted)
//! - Validation for the collected-payments deposit (setor ke kas)
//! - Error types for cash operations

pub mod error;
pub mod ledger;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use error::CashError;
pub use ledger::{CashLedger, PaymentForDeposit};
pub use types::{
    CashEntry, CashEntryInput, CashFlow, CashOutcome, DepositInput, DepositOutcome,
    DEPOSIT_CATEGORY,
};
