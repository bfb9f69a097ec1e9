//! Account service
//!
//! Registration and login on top of the account registry.

use serde_json::json;
use tracing::{debug, info};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Account, AccountRegistry};

use super::record_audit;

/// Service for registration and login
pub struct AccountService<'a> {
    registry: &'a mut AccountRegistry,
    audit: Option<&'a AuditLogger>,
}

impl<'a> AccountService<'a> {
    pub fn new(registry: &'a mut AccountRegistry, audit: Option<&'a AuditLogger>) -> Self {
        Self { registry, audit }
    }

    /// Register a new user
    pub fn register(&mut self, username: &str, password: &str) -> FinanceResult<()> {
        self.registry.register(username, password)?;
        info!(username, "Registered user");

        record_audit(
            self.audit,
            AuditEntry::create(
                EntityType::Account,
                username,
                None,
                &json!({ "username": username }),
            ),
        );
        Ok(())
    }

    /// Log in, handing out the account for the rest of the session
    ///
    /// Unknown users and wrong passwords both fail with `AuthFailure`.
    pub fn login(self, username: &str, password: &str) -> FinanceResult<&'a mut Account> {
        let registry = self.registry;
        match registry.authenticate_mut(username, password) {
            Some(account) => {
                info!(username, "User logged in");
                Ok(account)
            }
            None => {
                debug!(username, "Login rejected");
                Err(FinanceError::AuthFailure)
            }
        }
    }
}
