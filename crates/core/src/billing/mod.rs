//! Invoice billing logic.
//!
//! This module implements the invoice side of the engine:
//! - Invoice and natural-key domain types
//! - Roster and billing-catalog collaborator shapes
//! - Idempotent generation planning for recurring and initial passes
//! - Error types for billing operations

pub mod error;
pub mod plan;
pub mod types;

#[cfg(test)]
mod plan_props;

pub use error::BillingError;
pub use plan::BillingPlanner;
pub use types::{
    BillingCatalog, BillingComponent, ComponentKind, GenerationOutcome, GenerationPlan,
    GenerationSummary, Invoice, InvoiceDraft, InvoiceKey, InvoiceStatus, InvoiceTerm, Student,
    StudentStatus,
};
