//! Payment settlement logic.
//!
//! This module implements the payment side of the engine:
//! - Payment record and settlement input types
//! - All-or-nothing settlement validation
//! - Error types for payment operations

pub mod error;
pub mod service;
pub mod types;

pub use error::PaymentError;
pub use service::SettlementService;
pub use types::{Payment, PaymentInput, SettlementOutcome};
