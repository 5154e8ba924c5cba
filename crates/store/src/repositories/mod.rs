//! Repositories implementing the engine's coarse operations.
//!
//! One repository per subsystem, each holding a store handle. Domain rules
//! come from `santri-core`; the repositories add atomic persistence and
//! operation logging.

pub mod billing;
pub mod cash;
pub mod payment;
pub mod wallet;

pub use billing::BillingRepository;
pub use cash::CashRepository;
pub use payment::PaymentRepository;
pub use wallet::WalletRepository;
