//! wallet-cli - Terminal-based personal finance tracker
//!
//! This library provides the core of the wallet-cli application: user
//! accounts, each owning a ledger of categorized incomes and expenses with
//! per-category budgets, plus the menus and storage around them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, ledger, accounts, registry)
//! - `storage`: JSON snapshot storage with atomic writes
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display` / `export`: Summary rendering and file export
//! - `cli`: Interactive text menus
//!
//! # Example
//!
//! ```rust
//! use wallet_cli::models::{AccountRegistry, Money};
//!
//! let mut registry = AccountRegistry::new();
//! registry.register("alice", "secret").unwrap();
//!
//! let alice = registry.authenticate_mut("alice", "secret").unwrap();
//! alice.ledger.set_budget("food", Money::from_cents(10_000)).unwrap();
//! alice.ledger.add_expense("food", Money::from_cents(6_000)).unwrap();
//! assert_eq!(
//!     alice.ledger.remaining_budget("food").unwrap(),
//!     Some(Money::from_cents(4_000))
//! );
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
