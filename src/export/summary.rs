//! Summary export
//!
//! Writes a ledger summary to a file: plain text by default, or a JSON
//! document when the target path ends in `.json`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SummaryLabels;
use crate::display::format_summary;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{LedgerSummary, Money};

/// Current summary export schema version
pub const SUMMARY_SCHEMA_VERSION: &str = "1.0.0";

/// Output format for a summary export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
}

impl SummaryFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SummaryFormat::Json,
            _ => SummaryFormat::Text,
        }
    }
}

/// JSON form of an exported summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub username: String,
    pub total_income: Money,
    pub total_expense: Money,
    /// Remaining budget per budgeted category
    pub budgets: BTreeMap<String, Money>,
}

impl SummaryExport {
    pub fn new(username: &str, summary: &LedgerSummary) -> Self {
        Self {
            schema_version: SUMMARY_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            username: username.to_string(),
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            budgets: summary.budgets.clone(),
        }
    }
}

/// Write a summary to any writer in the given format
pub fn write_summary<W: Write>(
    writer: &mut W,
    username: &str,
    summary: &LedgerSummary,
    labels: &SummaryLabels,
    format: SummaryFormat,
) -> FinanceResult<()> {
    match format {
        SummaryFormat::Text => writer
            .write_all(format_summary(summary, labels).as_bytes())
            .map_err(|e| FinanceError::Export(e.to_string())),
        SummaryFormat::Json => {
            let export = SummaryExport::new(username, summary);
            serde_json::to_writer_pretty(&mut *writer, &export)
                .map_err(|e| FinanceError::Export(e.to_string()))?;
            writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))
        }
    }
}

/// Export a summary to a file, choosing the format from its extension
pub fn export_summary_to_file(
    path: &Path,
    username: &str,
    summary: &LedgerSummary,
    labels: &SummaryLabels,
) -> FinanceResult<SummaryFormat> {
    let format = SummaryFormat::from_path(path);

    let file = File::create(path).map_err(|e| {
        FinanceError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    write_summary(&mut writer, username, summary, labels, format)?;
    writer
        .flush()
        .map_err(|e| FinanceError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ledger;
    use tempfile::TempDir;

    fn sample_summary() -> LedgerSummary {
        let mut ledger = Ledger::new();
        ledger.add_income("salary", Money::from_cents(100_000)).unwrap();
        ledger.set_budget("food", Money::from_cents(10_000)).unwrap();
        ledger.add_expense("food", Money::from_cents(6_000)).unwrap();
        ledger.summary().unwrap()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(SummaryFormat::from_path(Path::new("out.json")), SummaryFormat::Json);
        assert_eq!(SummaryFormat::from_path(Path::new("OUT.JSON")), SummaryFormat::Json);
        assert_eq!(SummaryFormat::from_path(Path::new("out.txt")), SummaryFormat::Text);
        assert_eq!(SummaryFormat::from_path(Path::new("summary")), SummaryFormat::Text);
    }

    #[test]
    fn test_export_text_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stats.txt");

        let format =
            export_summary_to_file(&path, "alice", &sample_summary(), &SummaryLabels::default())
                .unwrap();
        assert_eq!(format, SummaryFormat::Text);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Общий доход: 1000.00",
                "Общий расход: 60.00",
                "Бюджеты:",
                "food: Остаток бюджета: 40.00",
            ]
        );
    }

    #[test]
    fn test_export_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stats.json");

        let format =
            export_summary_to_file(&path, "alice", &sample_summary(), &SummaryLabels::default())
                .unwrap();
        assert_eq!(format, SummaryFormat::Json);

        let content = std::fs::read_to_string(&path).unwrap();
        let export: SummaryExport = serde_json::from_str(&content).unwrap();
        assert_eq!(export.schema_version, SUMMARY_SCHEMA_VERSION);
        assert_eq!(export.username, "alice");
        assert_eq!(export.total_income, Money::from_cents(100_000));
        assert_eq!(export.budgets["food"], Money::from_cents(4_000));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no").join("such").join("dir.txt");

        let err =
            export_summary_to_file(&path, "alice", &sample_summary(), &SummaryLabels::default())
                .unwrap_err();
        assert!(matches!(err, FinanceError::Export(_)));
    }
}
