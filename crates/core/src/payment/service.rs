//! Settlement validation.
//!
//! Pure checks performed before a payment is persisted. Storage access is
//! injected as a status lookup so the rules stay testable without a store.

use rust_decimal::Decimal;
use santri_shared::types::InvoiceId;
use std::collections::HashSet;

use super::error::PaymentError;
use crate::billing::{Invoice, InvoiceStatus};

/// Settlement service: validates that a set of invoices can be paid
/// together.
pub struct SettlementService;

impl SettlementService {
    /// Validates a settlement against the current invoice states.
    ///
    /// Checks, in order:
    /// 1. The invoice list is non-empty and free of duplicates
    /// 2. Every referenced invoice exists
    /// 3. Every referenced invoice is currently unpaid
    ///
    /// Any failure rejects the whole settlement; partial application is
    /// never allowed.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError` when any check fails.
    pub fn validate<L>(invoice_ids: &[InvoiceId], status_lookup: L) -> Result<(), PaymentError>
    where
        L: Fn(InvoiceId) -> Option<InvoiceStatus>,
    {
        if invoice_ids.is_empty() {
            return Err(PaymentError::NoInvoicesSelected);
        }

        let mut seen = HashSet::with_capacity(invoice_ids.len());
        for &id in invoice_ids {
            if !seen.insert(id) {
                return Err(PaymentError::DuplicateInvoice(id));
            }
            match status_lookup(id) {
                None => return Err(PaymentError::InvoiceNotFound(id)),
                Some(InvoiceStatus::Paid) => return Err(PaymentError::InvoiceAlreadyPaid(id)),
                Some(InvoiceStatus::Unpaid) => {}
            }
        }

        Ok(())
    }

    /// Sums the amounts of the invoices being settled.
    #[must_use]
    pub fn total_amount(invoices: &[Invoice]) -> Decimal {
        invoices.iter().map(|invoice| invoice.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lookup_from(states: &[(u64, InvoiceStatus)]) -> impl Fn(InvoiceId) -> Option<InvoiceStatus> {
        let states: Vec<(InvoiceId, InvoiceStatus)> = states
            .iter()
            .map(|&(id, status)| (InvoiceId::from_raw(id), status))
            .collect();
        move |id| {
            states
                .iter()
                .find(|(candidate, _)| *candidate == id)
                .map(|(_, status)| *status)
        }
    }

    fn ids(raw: &[u64]) -> Vec<InvoiceId> {
        raw.iter().copied().map(InvoiceId::from_raw).collect()
    }

    #[test]
    fn test_validate_all_unpaid() {
        let lookup = lookup_from(&[
            (1, InvoiceStatus::Unpaid),
            (2, InvoiceStatus::Unpaid),
            (3, InvoiceStatus::Unpaid),
        ]);
        assert!(SettlementService::validate(&ids(&[1, 2, 3]), lookup).is_ok());
    }

    #[test]
    fn test_validate_empty_list() {
        let lookup = lookup_from(&[]);
        assert!(matches!(
            SettlementService::validate(&[], lookup),
            Err(PaymentError::NoInvoicesSelected)
        ));
    }

    #[test]
    fn test_validate_duplicate_invoice() {
        let lookup = lookup_from(&[(1, InvoiceStatus::Unpaid)]);
        assert!(matches!(
            SettlementService::validate(&ids(&[1, 1]), lookup),
            Err(PaymentError::DuplicateInvoice(id)) if id == InvoiceId::from_raw(1)
        ));
    }

    #[test]
    fn test_validate_missing_invoice() {
        let lookup = lookup_from(&[(1, InvoiceStatus::Unpaid)]);
        assert!(matches!(
            SettlementService::validate(&ids(&[1, 9]), lookup),
            Err(PaymentError::InvoiceNotFound(id)) if id == InvoiceId::from_raw(9)
        ));
    }

    #[rstest]
    #[case(&[(1, InvoiceStatus::Paid)], &[1])]
    #[case(&[(1, InvoiceStatus::Unpaid), (2, InvoiceStatus::Paid)], &[1, 2])]
    fn test_validate_already_paid(
        #[case] states: &[(u64, InvoiceStatus)],
        #[case] requested: &[u64],
    ) {
        let lookup = lookup_from(states);
        assert!(matches!(
            SettlementService::validate(&ids(requested), lookup),
            Err(PaymentError::InvoiceAlreadyPaid(_))
        ));
    }
}
