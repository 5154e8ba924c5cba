//! Ledger store for Santri Ledger.
//!
//! This crate provides the storage substrate and the coarse operations the
//! UI layer calls:
//! - `StoreState` - the five record collections and their id sequences
//! - `LedgerStore` - shared handle with atomic all-or-nothing transactions
//! - `repositories` - one repository per subsystem (billing, payment,
//!   wallet, cash)
//! - `snapshot` - durable JSON snapshots through OpenDAL

pub mod repositories;
pub mod snapshot;
pub mod state;
pub mod store;

pub use snapshot::{SnapshotError, SnapshotStore};
pub use state::StoreState;
pub use store::LedgerStore;
