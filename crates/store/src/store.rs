//! Shared store handle with atomic transactions.
//!
//! Every mutating operation runs under one exclusive async lock, which
//! serializes writers strictly enough for all five record collections (the
//! cash chain needs global ordering anyway). Rollback is copy-on-write: the
//! transaction body mutates a clone of the state, and only a successful
//! body replaces the shared state.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::state::StoreState;

/// Cheaply cloneable handle to the ledger store.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    inner: Arc<RwLock<StoreState>>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from previously persisted state.
    #[must_use]
    pub fn from_state(state: StoreState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Runs a read-only closure against the current state.
    pub async fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        let guard = self.inner.read().await;
        f(&guard)
    }

    /// Runs a closure with exclusive, all-or-nothing access to the state.
    ///
    /// The body receives a working copy; if it returns `Ok` every write
    /// commits together, if it returns `Err` every write is discarded.
    /// Readers never observe partial effects.
    ///
    /// # Errors
    ///
    /// Propagates the body's error unchanged.
    pub async fn transaction<T, E>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut guard = self.inner.write().await;
        let mut working = guard.clone();
        let value = f(&mut working)?;
        *guard = working;
        Ok(value)
    }

    /// Clones the current state, e.g. for snapshot persistence.
    pub async fn export_state(&self) -> StoreState {
        self.inner.read().await.clone()
    }

    /// Replaces the current state wholesale, e.g. after snapshot restore.
    pub async fn restore_state(&self, state: StoreState) {
        *self.inner.write().await = state;
    }
}
