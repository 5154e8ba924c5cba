//! Property-based tests for the wallet ledger.
//!
//! - Non-negativity: an accepted sequence of entries never drives the
//!   balance below zero
//! - Running-sum consistency: the balance equals the sum of accepted deltas
//! - Rejection leaves the balance untouched

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::WalletError;
use super::ledger::WalletLedger;
use super::types::WalletEntryKind;

/// Strategy for positive whole-rupiah amounts.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(Decimal::from)
}

/// Strategy for a wallet operation.
fn op_strategy() -> impl Strategy<Value = (WalletEntryKind, Decimal)> {
    (
        prop_oneof![
            Just(WalletEntryKind::Deposit),
            Just(WalletEntryKind::Withdrawal)
        ],
        amount_strategy(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Applying any sequence of operations (skipping rejected ones) keeps
    /// the balance non-negative and equal to the sum of applied deltas.
    #[test]
    fn prop_balance_non_negative_and_consistent(
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut balance = Decimal::ZERO;
        let mut applied_sum = Decimal::ZERO;

        for (kind, amount) in ops {
            match WalletLedger::next_balance(balance, kind, amount) {
                Ok(next) => {
                    balance = next;
                    applied_sum += kind.signed_amount(amount);
                }
                Err(WalletError::InsufficientBalance { available }) => {
                    // The rejection reports the untouched balance.
                    prop_assert_eq!(available, balance);
                }
                Err(other) => return Err(TestCaseError::fail(other.to_string())),
            }
            prop_assert!(balance >= Decimal::ZERO, "balance went negative");
            prop_assert_eq!(balance, applied_sum);
        }
    }

    /// A withdrawal of the exact balance succeeds; one rupiah more is
    /// rejected.
    #[test]
    fn prop_withdrawal_boundary_is_exact(amount in amount_strategy()) {
        let exact =
            WalletLedger::next_balance(amount, WalletEntryKind::Withdrawal, amount);
        prop_assert_eq!(exact.unwrap(), Decimal::ZERO);

        let over = WalletLedger::next_balance(
            amount,
            WalletEntryKind::Withdrawal,
            amount + Decimal::ONE,
        );
        prop_assert!(
            matches!(over, Err(WalletError::InsufficientBalance { .. })),
            "expected InsufficientBalance, got {:?}",
            over
        );
    }

    /// Deposits always succeed and always increase the balance.
    #[test]
    fn prop_deposit_always_increases(
        start in (0i64..1_000_000).prop_map(Decimal::from),
        amount in amount_strategy(),
    ) {
        let next =
            WalletLedger::next_balance(start, WalletEntryKind::Deposit, amount).unwrap();
        prop_assert!(next > start);
        prop_assert_eq!(next, start + amount);
    }
}
