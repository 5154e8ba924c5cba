//! Cash running-balance rules and deposit validation.
//!
//! The cash ledger is a single append-only chain: each entry's balance is
//! the previous entry's balance plus or minus its amount. Unlike the student
//! wallet, the cash balance has no floor at zero; overdraft is recorded as a
//! negative balance on purpose.

use rust_decimal::Decimal;
use santri_shared::types::PaymentId;
use std::collections::HashSet;

use super::error::CashError;
use super::types::{CashFlow, DepositInput};

/// State of a payment as seen by deposit validation.
#[derive(Debug, Clone, Copy)]
pub struct PaymentForDeposit {
    /// Whether the payment was already deposited into cash.
    pub deposited: bool,
    /// The payment's total amount.
    pub total_amount: Decimal,
}

/// Pure balance arithmetic and deposit validation for the cash ledger.
pub struct CashLedger;

impl CashLedger {
    /// Computes the balance after appending an entry.
    ///
    /// No non-negativity check: the cash account may legitimately be
    /// overdrawn.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` when `amount` is not strictly positive.
    pub fn next_balance(
        previous: Decimal,
        flow: CashFlow,
        amount: Decimal,
    ) -> Result<Decimal, CashError> {
        if amount <= Decimal::ZERO {
            return Err(CashError::InvalidAmount(amount));
        }
        Ok(previous + flow.signed_amount(amount))
    }

    /// Validates a collected-payments deposit against current payment
    /// states.
    ///
    /// Checks, in order: a positive total, a non-empty and duplicate-free
    /// payment list, every payment existing and not yet deposited, and -
    /// when `verify_total` is set - the caller-supplied total matching the
    /// sum of the referenced payments.
    ///
    /// Returns the referenced payments' sum.
    ///
    /// # Errors
    ///
    /// Returns `CashError` when any check fails; the deposit must then be
    /// abandoned wholesale.
    pub fn validate_deposit<L>(
        input: &DepositInput,
        payment_lookup: L,
        verify_total: bool,
    ) -> Result<Decimal, CashError>
    where
        L: Fn(PaymentId) -> Option<PaymentForDeposit>,
    {
        if input.total_amount <= Decimal::ZERO {
            return Err(CashError::InvalidAmount(input.total_amount));
        }
        if input.payment_ids.is_empty() {
            return Err(CashError::NoPaymentsSelected);
        }

        let mut seen = HashSet::with_capacity(input.payment_ids.len());
        let mut expected = Decimal::ZERO;
        for &id in &input.payment_ids {
            if !seen.insert(id) {
                return Err(CashError::DuplicatePayment(id));
            }
            let payment = payment_lookup(id).ok_or(CashError::PaymentNotFound(id))?;
            if payment.deposited {
                return Err(CashError::PaymentAlreadyDeposited(id));
            }
            expected += payment.total_amount;
        }

        if verify_total && expected != input.total_amount {
            return Err(CashError::DepositTotalMismatch {
                expected,
                provided: input.total_amount,
            });
        }

        Ok(expected)
    }
}
