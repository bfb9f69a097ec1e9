//! Export module for wallet-cli
//!
//! Writes ledger summaries to files as plain text or JSON.

pub mod summary;

pub use summary::{
    export_summary_to_file, write_summary, SummaryExport, SummaryFormat, SUMMARY_SCHEMA_VERSION,
};
