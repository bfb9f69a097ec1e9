//! Custom error types for wallet-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for wallet-cli operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Non-positive amount passed to an income, expense or budget operation
    #[error("{kind} amount must be positive, got {amount}")]
    InvalidAmount { kind: &'static str, amount: Money },

    /// Arithmetic on stored amounts left the representable range
    #[error("Amount out of range: {0}")]
    AmountOverflow(String),

    /// A required registration field was empty
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// Registration with a username that is already taken
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// Text that could not be read as an amount
    #[error("Invalid amount format: {0}")]
    Parse(String),

    /// Unknown user or wrong password; the two are reported identically
    #[error("Invalid username or password")]
    AuthFailure,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanceError {
    /// Create an "invalid amount" error for incomes
    pub fn invalid_income(amount: Money) -> Self {
        Self::InvalidAmount {
            kind: "Income",
            amount,
        }
    }

    /// Create an "invalid amount" error for expenses
    pub fn invalid_expense(amount: Money) -> Self {
        Self::InvalidAmount {
            kind: "Expense",
            amount,
        }
    }

    /// Create an "invalid amount" error for budgets
    pub fn invalid_budget(amount: Money) -> Self {
        Self::InvalidAmount {
            kind: "Budget",
            amount,
        }
    }

    /// Check if this error is a user input problem the menu can re-prompt for
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. }
                | Self::AmountOverflow(_)
                | Self::EmptyField(_)
                | Self::DuplicateUser(_)
                | Self::Parse(_)
                | Self::AuthFailure
        )
    }

    /// Check if this error came from reading or writing files
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Json(_) | Self::Storage(_) | Self::Export(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for wallet-cli operations
pub type FinanceResult<T> = Result<T, FinanceError>;
