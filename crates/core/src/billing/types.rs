//! Invoice domain types and generation inputs.
//!
//! This module defines the persisted invoice record, the natural key that
//! makes generation idempotent, and the read-only collaborator shapes
//! (roster and billing catalog) supplied per generation call.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use santri_shared::types::{BillingPeriod, ComponentId, InvoiceId, LevelId, PaymentId, StudentId};
use serde::{Deserialize, Serialize};

/// Enrollment status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    /// Currently enrolled; billed by generation passes.
    Active,
    /// No longer enrolled; never billed.
    Inactive,
}

/// A student as seen by the billing engine.
///
/// The roster is a read-only collaborator input; the engine never creates or
/// mutates student records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// Education level (jenjang), if assigned.
    pub level: Option<LevelId>,
    /// Year the student entered the institution.
    pub entry_year: Option<i32>,
    /// Enrollment status.
    pub status: StudentStatus,
}

/// How a billing component recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Billed every month (e.g. SPP).
    Recurring,
    /// Billed once per student (e.g. registration fee).
    OneTime,
    /// Billed as a fixed number of installments.
    Installment {
        /// Number of installments; the component amount is per installment.
        installments: u32,
    },
}

/// One configured billing component (jenis tagihan).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingComponent {
    /// Unique identifier.
    pub id: ComponentId,
    /// Display name (e.g. "SPP").
    pub name: String,
    /// Nominal amount in whole rupiah. For installment components this is
    /// the per-installment amount.
    pub amount: Decimal,
    /// Recurrence kind.
    pub kind: ComponentKind,
    /// Education level the component applies to; `None` means all levels.
    pub level: Option<LevelId>,
    /// Entry year the component applies to; `None` means all entry years.
    pub entry_year: Option<i32>,
}

/// The immutable billing configuration snapshot passed to each generation
/// call: the configured components plus the set of known education levels.
///
/// Passing this explicitly (instead of reading ambient settings) keeps
/// generation deterministic and testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingCatalog {
    /// All configured billing components.
    pub components: Vec<BillingComponent>,
    /// Known education levels; a student whose level is absent from this
    /// list is treated as unresolved.
    pub levels: Vec<LevelId>,
}

impl BillingCatalog {
    /// Resolves a student's education level against the known levels.
    ///
    /// Returns `None` when the student has no level or the level is not in
    /// the catalog.
    #[must_use]
    pub fn resolve_level(&self, student: &Student) -> Option<LevelId> {
        student.level.filter(|level| self.levels.contains(level))
    }
}

/// The natural-key discriminant of an invoice.
///
/// Recurring invoices key on their billing period, installment invoices on
/// their 1-based installment index, and one-time invoices carry no further
/// discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InvoiceTerm {
    /// Recurring charge for one billing period.
    Period(BillingPeriod),
    /// Installment number (1-based) of an installment plan.
    Installment(u32),
    /// Single charge with no period or index.
    OneTime,
}

/// The natural key of an invoice.
///
/// The generator must never create two invoices with the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceKey {
    /// The billed student.
    pub student_id: StudentId,
    /// The billing component.
    pub component_id: ComponentId,
    /// The recurrence discriminant.
    pub term: InvoiceTerm,
}

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet settled.
    Unpaid,
    /// Settled by a payment (immutable afterwards).
    Paid,
}

/// One amount owed by one student for one billing component (tagihan).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier, assigned by the store.
    pub id: InvoiceId,
    /// The billed student.
    pub student_id: StudentId,
    /// The billing component.
    pub component_id: ComponentId,
    /// The recurrence discriminant (natural-key part).
    pub term: InvoiceTerm,
    /// Amount owed in whole rupiah.
    pub amount: Decimal,
    /// Payment status.
    pub status: InvoiceStatus,
    /// Due date, when the component defines one.
    pub due_date: Option<NaiveDate>,
    /// Date the invoice was settled; set only when paid.
    pub paid_date: Option<NaiveDate>,
    /// The payment that settled this invoice; set only when paid.
    pub payment_id: Option<PaymentId>,
}

impl Invoice {
    /// Returns the natural key of this invoice.
    #[must_use]
    pub const fn key(&self) -> InvoiceKey {
        InvoiceKey {
            student_id: self.student_id,
            component_id: self.component_id,
            term: self.term,
        }
    }

    /// Returns true if the invoice has not been settled.
    #[must_use]
    pub fn is_unpaid(&self) -> bool {
        self.status == InvoiceStatus::Unpaid
    }

    /// Marks the invoice settled by the given payment.
    pub fn mark_paid(&mut self, payment_id: PaymentId, paid_date: NaiveDate) {
        self.status = InvoiceStatus::Paid;
        self.paid_date = Some(paid_date);
        self.payment_id = Some(payment_id);
    }
}

/// An invoice planned by the generator but not yet persisted.
///
/// Drafts carry no identifier; the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// The billed student.
    pub student_id: StudentId,
    /// The billing component.
    pub component_id: ComponentId,
    /// The recurrence discriminant.
    pub term: InvoiceTerm,
    /// Amount owed in whole rupiah.
    pub amount: Decimal,
    /// Due date, when the component defines one.
    pub due_date: Option<NaiveDate>,
}

impl InvoiceDraft {
    /// Returns the natural key this draft will persist under.
    #[must_use]
    pub const fn key(&self) -> InvoiceKey {
        InvoiceKey {
            student_id: self.student_id,
            component_id: self.component_id,
            term: self.term,
        }
    }
}

/// Counts from one generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Invoices newly created by this pass.
    pub generated: usize,
    /// Natural keys that already existed and were left untouched.
    pub skipped: usize,
    /// Active students skipped because their level could not be resolved.
    pub unresolved: usize,
}

/// The pure planning result: drafts to persist plus counts.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// Invoices that should be created.
    pub drafts: Vec<InvoiceDraft>,
    /// Pass counts.
    pub summary: GenerationSummary,
}

/// Result of a persisted generation pass.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The invoices created by this pass, with assigned identifiers.
    pub invoices: Vec<Invoice>,
    /// Pass counts.
    pub summary: GenerationSummary,
}
