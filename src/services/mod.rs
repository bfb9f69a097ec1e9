//! Service layer for wallet-cli
//!
//! The service layer applies business operations to the registry and to a
//! logged-in account's ledger, recording each change in the audit log.

pub mod account;
pub mod ledger;

pub use account::AccountService;
pub use ledger::LedgerService;

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};

/// Append to the audit log when one is configured
///
/// The change being audited has already been applied, so a failed write is
/// logged and otherwise ignored.
pub(crate) fn record_audit(audit: Option<&AuditLogger>, entry: AuditEntry) {
    if let Some(logger) = audit {
        if let Err(e) = logger.log(&entry) {
            warn!(error = %e, path = %logger.path().display(), "Failed to write audit entry");
        }
    }
}
