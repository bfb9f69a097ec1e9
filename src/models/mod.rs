//! Core data models for wallet-cli
//!
//! This module contains the data structures of the finance domain: money
//! amounts, per-user ledgers, accounts and the account registry.

pub mod account;
pub mod ledger;
pub mod money;
pub mod registry;

pub use account::Account;
pub use ledger::{Ledger, LedgerNotice, LedgerSummary};
pub use money::Money;
pub use registry::AccountRegistry;
