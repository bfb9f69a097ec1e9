//! Registry snapshot storage
//!
//! The whole account registry is saved as one versioned JSON document and
//! read back on startup. A missing snapshot is normal on first run. An
//! unreadable one is moved aside and reported, and the program starts with
//! an empty registry either way.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::FinanceResult;
use crate::models::{Account, AccountRegistry};

use super::file_io::{quarantine_file, read_json_optional, write_json_atomic};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// On-disk form of the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegistrySnapshot {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    app_version: String,
    accounts: Vec<Account>,
}

/// What happened when reading the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Snapshot read and validated
    Loaded { accounts: usize },
    /// No snapshot on disk yet
    Missing,
    /// Snapshot present but unusable; an empty registry was used instead
    Corrupt {
        reason: String,
        /// Where the unreadable file was moved, if moving it succeeded
        quarantined: Option<PathBuf>,
    },
}

/// Registry plus the outcome of reading it
#[derive(Debug)]
pub struct LoadedRegistry {
    pub registry: AccountRegistry,
    pub outcome: LoadOutcome,
}

/// Reads and writes the registry snapshot file
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry, never failing
    ///
    /// Missing and corrupt snapshots both yield an empty registry; the
    /// outcome tells them apart.
    pub fn load(&self) -> LoadedRegistry {
        match self.try_load() {
            Ok(Some(registry)) => {
                info!(path = %self.path.display(), accounts = registry.len(), "Loaded registry");
                LoadedRegistry {
                    outcome: LoadOutcome::Loaded {
                        accounts: registry.len(),
                    },
                    registry,
                }
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "No registry snapshot, starting empty");
                LoadedRegistry {
                    registry: AccountRegistry::new(),
                    outcome: LoadOutcome::Missing,
                }
            }
            Err(reason) => {
                let quarantined = match quarantine_file(&self.path) {
                    Ok(moved) => Some(moved),
                    Err(e) => {
                        warn!(error = %e, "Could not move unreadable snapshot aside");
                        None
                    }
                };
                warn!(
                    path = %self.path.display(),
                    reason = %reason,
                    "Registry snapshot unreadable, starting empty"
                );
                LoadedRegistry {
                    registry: AccountRegistry::new(),
                    outcome: LoadOutcome::Corrupt {
                        reason,
                        quarantined,
                    },
                }
            }
        }
    }

    fn try_load(&self) -> Result<Option<AccountRegistry>, String> {
        let snapshot: RegistrySnapshot = match read_json_optional(&self.path) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return Ok(None),
            Err(e) => return Err(e.to_string()),
        };

        if snapshot.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(format!(
                "unsupported snapshot schema version {}",
                snapshot.schema_version
            ));
        }

        for account in &snapshot.accounts {
            account
                .ledger
                .check_integrity()
                .map_err(|e| format!("account '{}': {}", account.username, e))?;
        }

        AccountRegistry::from_accounts(snapshot.accounts).map(Some)
    }

    /// Write the full registry atomically
    pub fn save(&self, registry: &AccountRegistry) -> FinanceResult<()> {
        let snapshot = RegistrySnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            accounts: registry.accounts().cloned().collect(),
        };

        write_json_atomic(&self.path, &snapshot)?;
        info!(path = %self.path.display(), accounts = registry.len(), "Saved registry");
        Ok(())
    }
}
