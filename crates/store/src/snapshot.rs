//! Durable store snapshots using Apache OpenDAL.
//!
//! The whole store state is persisted as one JSON document; this is the
//! shape a backup/restore layer depends on. Only the filesystem service is
//! wired up, but the operator keeps the writer vendor-agnostic.

use opendal::{services, ErrorKind, Operator};
use santri_shared::config::SnapshotConfig;

use crate::state::StoreState;
use crate::store::LedgerStore;

/// Errors from snapshot persistence.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The storage backend could not be initialized or accessed.
    #[error("Snapshot storage error: {0}")]
    Storage(#[from] opendal::Error),

    /// The state could not be encoded or decoded.
    #[error("Snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Snapshot reader/writer bound to one file in one storage root.
pub struct SnapshotStore {
    operator: Operator,
    file: String,
}

impl SnapshotStore {
    /// Creates a snapshot store from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be initialized.
    pub fn from_config(config: &SnapshotConfig) -> Result<Self, SnapshotError> {
        let builder = services::Fs::default().root(&config.root);
        let operator = Operator::new(builder)?.finish();
        Ok(Self {
            operator,
            file: config.file.clone(),
        })
    }

    /// Persists the store's current state.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub async fn save(&self, store: &LedgerStore) -> Result<(), SnapshotError> {
        let state = store.export_state().await;
        let bytes = serde_json::to_vec_pretty(&state)?;
        self.operator.write(&self.file, bytes).await?;
        tracing::info!(file = %self.file, "ledger snapshot saved");
        Ok(())
    }

    /// Loads the persisted state, or `None` when no snapshot exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or decoding fails.
    pub async fn load(&self) -> Result<Option<StoreState>, SnapshotError> {
        match self.operator.read(&self.file).await {
            Ok(buffer) => {
                let state = serde_json::from_slice(&buffer.to_vec())?;
                Ok(Some(state))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotError::Storage(err)),
        }
    }
}
