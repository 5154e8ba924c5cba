//! Billing repository: persisted invoice generation passes.

use santri_core::billing::{
    BillingCatalog, BillingError, BillingPlanner, GenerationOutcome, Invoice, Student,
};
use santri_shared::config::PolicyConfig;
use santri_shared::types::{BillingPeriod, InvoiceId, StudentId};
use tracing::{info, warn};

use crate::store::LedgerStore;

/// Repository for invoice generation and invoice reads.
#[derive(Debug, Clone)]
pub struct BillingRepository {
    store: LedgerStore,
    policy: PolicyConfig,
}

impl BillingRepository {
    /// Creates a new billing repository.
    #[must_use]
    pub const fn new(store: LedgerStore, policy: PolicyConfig) -> Self {
        Self { store, policy }
    }

    /// Runs the recurring billing pass for one period.
    ///
    /// Idempotent: invoices whose natural key already exists are skipped,
    /// so re-running the same period never duplicates a charge. The whole
    /// pass commits in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Store` on storage failure.
    pub async fn generate_recurring(
        &self,
        period: BillingPeriod,
        roster: &[Student],
        catalog: &BillingCatalog,
    ) -> Result<GenerationOutcome, BillingError> {
        let due_day = self.policy.due_day;
        let outcome = self
            .store
            .transaction(|state| {
                let existing = state.invoice_keys();
                let plan =
                    BillingPlanner::plan_recurring(period, due_day, roster, catalog, &existing);
                let invoices = plan
                    .drafts
                    .into_iter()
                    .map(|draft| state.insert_invoice(draft))
                    .collect();
                Ok::<_, BillingError>(GenerationOutcome {
                    invoices,
                    summary: plan.summary,
                })
            })
            .await?;

        self.log_pass("recurring", Some(period), &outcome);
        Ok(outcome)
    }

    /// Runs the initial billing pass: one-time and installment components.
    ///
    /// Re-running catches up newly eligible students and missing
    /// installments without duplicating existing invoices.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Store` on storage failure.
    pub async fn generate_initial(
        &self,
        roster: &[Student],
        catalog: &BillingCatalog,
    ) -> Result<GenerationOutcome, BillingError> {
        let outcome = self
            .store
            .transaction(|state| {
                let existing = state.invoice_keys();
                let plan = BillingPlanner::plan_initial(roster, catalog, &existing);
                let invoices = plan
                    .drafts
                    .into_iter()
                    .map(|draft| state.insert_invoice(draft))
                    .collect();
                Ok::<_, BillingError>(GenerationOutcome {
                    invoices,
                    summary: plan.summary,
                })
            })
            .await?;

        self.log_pass("initial", None, &outcome);
        Ok(outcome)
    }

    /// Point lookup of an invoice.
    pub async fn invoice(&self, id: InvoiceId) -> Option<Invoice> {
        self.store.read(|state| state.invoice(id).cloned()).await
    }

    /// Outstanding (unpaid) invoices of one student, ordered by id.
    pub async fn unpaid_invoices(&self, student_id: StudentId) -> Vec<Invoice> {
        self.store
            .read(|state| state.unpaid_invoices(student_id).cloned().collect())
            .await
    }

    fn log_pass(&self, pass: &str, period: Option<BillingPeriod>, outcome: &GenerationOutcome) {
        info!(
            pass,
            period = period.map(|p| p.to_string()),
            generated = outcome.summary.generated,
            skipped = outcome.summary.skipped,
            "invoice generation pass committed"
        );
        if outcome.summary.unresolved > 0 && self.policy.warn_unresolved_level {
            warn!(
                pass,
                unresolved = outcome.summary.unresolved,
                "students skipped: education level not resolvable"
            );
        }
    }
}
