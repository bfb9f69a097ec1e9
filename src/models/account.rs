//! User account model
//!
//! An account pairs login credentials with the ledger it exclusively owns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ledger::Ledger;

/// A registered user and their ledger
///
/// Passwords are kept and compared as plain text; this tracker makes no
/// attempt at credential security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique login name (case-sensitive)
    pub username: String,

    pub password: String,

    /// When the account was registered
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub ledger: Ledger,
}

impl Account {
    /// Create a new account with an empty ledger
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            created_at: Utc::now(),
            ledger: Ledger::new(),
        }
    }

    /// Check a password attempt against the stored one
    pub fn password_matches(&self, attempt: &str) -> bool {
        self.password == attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_new_account_has_empty_ledger() {
        let account = Account::new("alice", "secret");
        assert_eq!(account.username, "alice");
        assert!(account.ledger.is_empty());
        assert_eq!(account.ledger.balance(), Money::zero());
    }

    #[test]
    fn test_password_matches_exactly() {
        let account = Account::new("alice", "secret");
        assert!(account.password_matches("secret"));
        assert!(!account.password_matches("Secret"));
        assert!(!account.password_matches("secret "));
    }

    #[test]
    fn test_serialization() {
        let mut account = Account::new("bob", "pw");
        account
            .ledger
            .add_income("salary", Money::from_cents(10_000))
            .unwrap();

        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }
}
