//! User settings for wallet-cli
//!
//! Manages preferences: where the registry snapshot lives, whether the audit
//! log is written, and the labels used in summaries.

use serde::{Deserialize, Serialize};

use super::paths::{WalletPaths, DEFAULT_DATA_FILE};
use crate::error::FinanceError;

/// Labels used when rendering a ledger summary
///
/// The line structure is fixed; only the text is configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLabels {
    #[serde(default = "default_total_income_label")]
    pub total_income: String,

    #[serde(default = "default_total_expense_label")]
    pub total_expense: String,

    #[serde(default = "default_budgets_header")]
    pub budgets_header: String,

    #[serde(default = "default_remaining_budget_label")]
    pub remaining_budget: String,
}

fn default_total_income_label() -> String {
    "Общий доход".to_string()
}

fn default_total_expense_label() -> String {
    "Общий расход".to_string()
}

fn default_budgets_header() -> String {
    "Бюджеты".to_string()
}

fn default_remaining_budget_label() -> String {
    "Остаток бюджета".to_string()
}

impl Default for SummaryLabels {
    fn default() -> Self {
        Self {
            total_income: default_total_income_label(),
            total_expense: default_total_expense_label(),
            budgets_header: default_budgets_header(),
            remaining_budget: default_remaining_budget_label(),
        }
    }
}

/// User settings for wallet-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Registry snapshot file, relative to the base directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Whether ledger changes are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    #[serde(default)]
    pub summary_labels: SummaryLabels,
}

fn default_schema_version() -> u32 {
    1
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: default_data_file(),
            audit_enabled: default_audit_enabled(),
            summary_labels: SummaryLabels::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &WalletPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))
    }
}
