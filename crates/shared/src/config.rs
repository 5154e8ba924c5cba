//! Engine configuration management.

use serde::Deserialize;

/// Engine configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    /// Snapshot persistence configuration.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    /// Business-policy knobs.
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Where the durable store snapshot is written.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Root directory for snapshot files.
    #[serde(default = "default_snapshot_root")]
    pub root: String,
    /// Snapshot file name within the root.
    #[serde(default = "default_snapshot_file")]
    pub file: String,
}

fn default_snapshot_root() -> String {
    "data".to_string()
}

fn default_snapshot_file() -> String {
    "ledger.json".to_string()
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            root: default_snapshot_root(),
            file: default_snapshot_file(),
        }
    }
}

/// Policy knobs for behavior operators may want to tune.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Whether `deposit_collected` verifies the caller-supplied total against
    /// the sum of the referenced payments. `false` trusts the caller's total
    /// as given.
    #[serde(default = "default_verify_deposit_total")]
    pub verify_deposit_total: bool,
    /// Day of month recurring invoices fall due (clamped to month end).
    #[serde(default = "default_due_day")]
    pub due_day: u32,
    /// Whether generation logs a warning for students whose education level
    /// cannot be resolved. `false` skips them silently.
    #[serde(default)]
    pub warn_unresolved_level: bool,
}

fn default_verify_deposit_total() -> bool {
    true
}

fn default_due_day() -> u32 {
    10
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            verify_deposit_total: default_verify_deposit_total(),
            due_day: default_due_day(),
            warn_unresolved_level: false,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SANTRI").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
