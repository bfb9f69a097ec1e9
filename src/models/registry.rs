//! Account registry
//!
//! The in-memory mapping from username to account. The registry is owned by
//! the caller for the whole process run and handed to the menus and to the
//! persistence layer explicitly.

use std::collections::BTreeMap;

use super::account::Account;
use crate::error::{FinanceError, FinanceResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRegistry {
    accounts: BTreeMap<String, Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user with a fresh, empty ledger
    ///
    /// Username and password must contain something other than whitespace.
    /// The username is checked first, then uniqueness.
    pub fn register(&mut self, username: &str, password: &str) -> FinanceResult<&Account> {
        if username.trim().is_empty() {
            return Err(FinanceError::EmptyField("Username"));
        }
        if password.trim().is_empty() {
            return Err(FinanceError::EmptyField("Password"));
        }
        if self.accounts.contains_key(username) {
            return Err(FinanceError::DuplicateUser(username.to_string()));
        }

        let account = self
            .accounts
            .entry(username.to_string())
            .or_insert_with(|| Account::new(username, password));
        Ok(account)
    }

    /// Find the account whose username and password both match
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&Account> {
        self.accounts
            .get(username)
            .filter(|a| a.password_matches(password))
    }

    /// Mutable variant of [`authenticate`](Self::authenticate) for a session
    pub fn authenticate_mut(&mut self, username: &str, password: &str) -> Option<&mut Account> {
        self.accounts
            .get_mut(username)
            .filter(|a| a.password_matches(password))
    }

    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Registered usernames in sorted order
    pub fn usernames(&self) -> Vec<&str> {
        self.accounts.keys().map(String::as_str).collect()
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Rebuild a registry from stored accounts
    ///
    /// Fails when two accounts share a username.
    pub fn from_accounts(accounts: Vec<Account>) -> Result<Self, String> {
        let mut map = BTreeMap::new();
        for account in accounts {
            let username = account.username.clone();
            if map.insert(username.clone(), account).is_some() {
                return Err(format!("duplicate username '{}'", username));
            }
        }
        Ok(Self { accounts: map })
    }
}
