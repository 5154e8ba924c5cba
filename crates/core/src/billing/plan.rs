//! Idempotent invoice generation planning.
//!
//! The planner is pure: it derives the set of invoices that *should* exist
//! for a roster and catalog snapshot, and emits only the ones whose natural
//! key is not already present. Persisting the resulting drafts is the store's
//! job; re-running a pass with the same inputs therefore never duplicates an
//! invoice.

use std::collections::HashSet;

use santri_shared::types::BillingPeriod;

use super::types::{
    BillingCatalog, BillingComponent, ComponentKind, GenerationPlan, GenerationSummary,
    InvoiceDraft, InvoiceKey, InvoiceTerm, Student, StudentStatus,
};

/// Pure planner for recurring and initial (one-time/installment) billing
/// passes.
///
/// This service contains no storage access; the set of existing invoice keys
/// is supplied as a snapshot by the caller.
pub struct BillingPlanner;

impl BillingPlanner {
    /// Plans the recurring billing pass for one period.
    ///
    /// For each active student and each recurring component applicable to
    /// the student's level (components without a level scope apply to every
    /// level), the draft is emitted unless the natural key
    /// (student, component, period) already exists. Students whose level
    /// cannot be resolved against the catalog are skipped for the whole pass
    /// and counted in `summary.unresolved`.
    #[must_use]
    pub fn plan_recurring(
        period: BillingPeriod,
        due_day: u32,
        roster: &[Student],
        catalog: &BillingCatalog,
        existing: &HashSet<InvoiceKey>,
    ) -> GenerationPlan {
        let mut drafts = Vec::new();
        let mut summary = GenerationSummary::default();
        let mut seen: HashSet<InvoiceKey> = HashSet::new();
        let due_date = period.day(due_day);

        for student in roster {
            if student.status != StudentStatus::Active {
                continue;
            }
            let Some(level) = catalog.resolve_level(student) else {
                summary.unresolved += 1;
                continue;
            };

            for component in &catalog.components {
                if component.kind != ComponentKind::Recurring {
                    continue;
                }
                if !component.level.is_none_or(|scope| scope == level) {
                    continue;
                }

                let draft = InvoiceDraft {
                    student_id: student.id,
                    component_id: component.id,
                    term: InvoiceTerm::Period(period),
                    amount: component.amount,
                    due_date: Some(due_date),
                };
                Self::emit(draft, existing, &mut seen, &mut drafts, &mut summary);
            }
        }

        GenerationPlan { drafts, summary }
    }

    /// Plans the initial billing pass: one-time and installment components.
    ///
    /// One-time components key on (student, component) and are created once.
    /// Installment components emit every missing (student, component, index)
    /// for indices 1..=N, so re-running the pass catches up newly eligible
    /// students without duplicating existing installments. Entry-year scoped
    /// components only apply to students with a matching entry year.
    #[must_use]
    pub fn plan_initial(
        roster: &[Student],
        catalog: &BillingCatalog,
        existing: &HashSet<InvoiceKey>,
    ) -> GenerationPlan {
        let mut drafts = Vec::new();
        let mut summary = GenerationSummary::default();
        let mut seen: HashSet<InvoiceKey> = HashSet::new();

        for student in roster {
            if student.status != StudentStatus::Active {
                continue;
            }
            let Some(level) = catalog.resolve_level(student) else {
                summary.unresolved += 1;
                continue;
            };

            for component in &catalog.components {
                if !Self::applies_initially(component, level, student) {
                    continue;
                }

                match component.kind {
                    ComponentKind::Recurring => {}
                    ComponentKind::OneTime => {
                        let draft = InvoiceDraft {
                            student_id: student.id,
                            component_id: component.id,
                            term: InvoiceTerm::OneTime,
                            amount: component.amount,
                            due_date: None,
                        };
                        Self::emit(draft, existing, &mut seen, &mut drafts, &mut summary);
                    }
                    ComponentKind::Installment { installments } => {
                        for index in 1..=installments {
                            let draft = InvoiceDraft {
                                student_id: student.id,
                                component_id: component.id,
                                term: InvoiceTerm::Installment(index),
                                amount: component.amount,
                                due_date: None,
                            };
                            Self::emit(draft, existing, &mut seen, &mut drafts, &mut summary);
                        }
                    }
                }
            }
        }

        GenerationPlan { drafts, summary }
    }

    /// Returns true if a one-time/installment component applies to the
    /// student.
    fn applies_initially(
        component: &BillingComponent,
        level: santri_shared::types::LevelId,
        student: &Student,
    ) -> bool {
        if component.kind == ComponentKind::Recurring {
            return false;
        }
        if !component.level.is_none_or(|scope| scope == level) {
            return false;
        }
        component
            .entry_year
            .is_none_or(|scope| student.entry_year == Some(scope))
    }

    /// Emits a draft unless its key exists in the store snapshot or was
    /// already emitted during this pass (guards against duplicate roster
    /// rows).
    fn emit(
        draft: InvoiceDraft,
        existing: &HashSet<InvoiceKey>,
        seen: &mut HashSet<InvoiceKey>,
        drafts: &mut Vec<InvoiceDraft>,
        summary: &mut GenerationSummary,
    ) {
        let key = draft.key();
        if existing.contains(&key) || !seen.insert(key) {
            summary.skipped += 1;
        } else {
            summary.generated += 1;
            drafts.push(draft);
        }
    }
}
