//! Payment repository: atomic invoice settlement.

use santri_core::billing::Invoice;
use santri_core::payment::{
    Payment, PaymentError, PaymentInput, SettlementOutcome, SettlementService,
};
use santri_shared::types::{InvoiceId, PaymentId};
use tracing::info;

use crate::store::LedgerStore;

/// Repository for payment settlement and payment reads.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    store: LedgerStore,
}

impl PaymentRepository {
    /// Creates a new payment repository.
    #[must_use]
    pub const fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Settles a set of invoices with one payment, atomically.
    ///
    /// Either the payment is created and every referenced invoice flips to
    /// paid, or nothing changes: a single already-paid or missing invoice
    /// aborts the whole settlement.
    ///
    /// # Errors
    ///
    /// - `NoInvoicesSelected` / `DuplicateInvoice` before any lookup
    /// - `InvoiceNotFound` / `InvoiceAlreadyPaid` on stale caller views
    /// - `Store` on storage failure
    pub async fn apply_payment(
        &self,
        invoice_ids: &[InvoiceId],
        input: PaymentInput,
    ) -> Result<SettlementOutcome, PaymentError> {
        let outcome = self
            .store
            .transaction(|state| {
                SettlementService::validate(invoice_ids, |id| {
                    state.invoice(id).map(|invoice| invoice.status)
                })?;

                let settled: Vec<Invoice> = invoice_ids
                    .iter()
                    .map(|&id| {
                        state
                            .invoice(id)
                            .cloned()
                            .ok_or(PaymentError::InvoiceNotFound(id))
                    })
                    .collect::<Result<_, _>>()?;
                let total = SettlementService::total_amount(&settled);

                let payment = state.insert_payment(invoice_ids.to_vec(), &input, total);
                let invoices = invoice_ids
                    .iter()
                    .map(|&id| {
                        state
                            .mark_invoice_paid(id, payment.id, input.date)
                            .ok_or(PaymentError::InvoiceNotFound(id))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(SettlementOutcome { payment, invoices })
            })
            .await?;

        info!(
            payment_id = %outcome.payment.id,
            invoices = outcome.invoices.len(),
            total = %outcome.payment.total_amount,
            "payment applied"
        );
        Ok(outcome)
    }

    /// Point lookup of a payment.
    pub async fn payment(&self, id: PaymentId) -> Option<Payment> {
        self.store.read(|state| state.payment(id).cloned()).await
    }

    /// Payments not yet deposited into the cash ledger, ordered by id.
    pub async fn undeposited_payments(&self) -> Vec<Payment> {
        self.store
            .read(|state| state.undeposited_payments().cloned().collect())
            .await
    }
}
