//! Core billing and ledger logic for Santri Ledger.
//!
//! This crate contains pure business logic with ZERO storage dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `billing` - Invoice domain types and idempotent generation planning
//! - `payment` - Settlement validation for paying invoices
//! - `wallet` - Per-student prepaid balance ledger
//! - `cash` - Institution-wide cash ledger and payment deposits

pub mod billing;
pub mod cash;
pub mod payment;
pub mod wallet;
