//! Property-based tests for the cash ledger.
//!
//! - Chain consistency: the final balance equals the signed sum of all
//!   entries
//! - Every intermediate balance is the signed prefix sum
//! - Determinism

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::ledger::CashLedger;
use super::types::CashFlow;

/// Strategy for positive whole-rupiah amounts.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(Decimal::from)
}

/// Strategy for a cash movement.
fn movement_strategy() -> impl Strategy<Value = (CashFlow, Decimal)> {
    (
        prop_oneof![Just(CashFlow::Inflow), Just(CashFlow::Outflow)],
        amount_strategy(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Each balance in the chain is the signed prefix sum of the movements
    /// so far, and the final balance is the total signed sum.
    #[test]
    fn prop_chain_is_signed_prefix_sums(
        movements in prop::collection::vec(movement_strategy(), 1..40),
    ) {
        let mut balance = Decimal::ZERO;
        let mut prefix = Decimal::ZERO;

        for (flow, amount) in &movements {
            balance = CashLedger::next_balance(balance, *flow, *amount).unwrap();
            prefix += flow.signed_amount(*amount);
            prop_assert_eq!(balance, prefix);
        }

        let total: Decimal = movements
            .iter()
            .map(|(flow, amount)| flow.signed_amount(*amount))
            .sum();
        prop_assert_eq!(balance, total);
    }

    /// Outflows are never rejected for driving the balance negative.
    #[test]
    fn prop_overdraft_is_permitted(amount in amount_strategy()) {
        let balance =
            CashLedger::next_balance(Decimal::ZERO, CashFlow::Outflow, amount).unwrap();
        prop_assert_eq!(balance, -amount);
    }

    /// The chain is deterministic.
    #[test]
    fn prop_chain_deterministic(
        movements in prop::collection::vec(movement_strategy(), 1..20),
    ) {
        let run = |movements: &[(CashFlow, Decimal)]| -> Decimal {
            movements.iter().fold(Decimal::ZERO, |balance, (flow, amount)| {
                CashLedger::next_balance(balance, *flow, *amount).unwrap()
            })
        };
        prop_assert_eq!(run(&movements), run(&movements));
    }
}
