//! Audit logging system for wallet-cli
//!
//! Records registrations and every ledger change in an append-only audit
//! log, one JSON object per line. Passwords are never written here.
//!
//! ```rust,ignore
//! use wallet_cli::audit::{AuditEntry, AuditLogger, EntityType};
//! use wallet_cli::models::Money;
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let amount = Money::from_cents(100_000);
//! logger.log(&AuditEntry::create(EntityType::Income, "alice", Some("salary".into()), &amount))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
