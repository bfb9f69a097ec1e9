//! Ledger service
//!
//! Applies income, expense and budget operations to a logged-in account's
//! ledger and records each change in the audit log.

use std::path::Path;

use tracing::{debug, info};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::SummaryLabels;
use crate::error::FinanceResult;
use crate::export::{export_summary_to_file, SummaryFormat};
use crate::models::{Account, LedgerNotice, LedgerSummary, Money};

use super::record_audit;

/// Service for one account's ledger
pub struct LedgerService<'a> {
    account: &'a mut Account,
    audit: Option<&'a AuditLogger>,
}

impl<'a> LedgerService<'a> {
    pub fn new(account: &'a mut Account, audit: Option<&'a AuditLogger>) -> Self {
        Self { account, audit }
    }

    pub fn balance(&self) -> Money {
        self.account.ledger.balance()
    }

    pub fn add_income(&mut self, category: &str, amount: Money) -> FinanceResult<()> {
        self.account.ledger.add_income(category, amount)?;
        debug!(username = %self.account.username, category, %amount, "Income recorded");

        record_audit(
            self.audit,
            AuditEntry::create(
                EntityType::Income,
                self.account.username.as_str(),
                Some(category.to_string()),
                &amount,
            ),
        );
        Ok(())
    }

    /// Record an expense, returning any budget overrun or deficit notices
    pub fn add_expense(
        &mut self,
        category: &str,
        amount: Money,
    ) -> FinanceResult<Vec<LedgerNotice>> {
        let notices = self.account.ledger.add_expense(category, amount)?;
        debug!(username = %self.account.username, category, %amount, "Expense recorded");

        for notice in &notices {
            info!(username = %self.account.username, notice = %notice, "Ledger notice");
        }

        record_audit(
            self.audit,
            AuditEntry::create(
                EntityType::Expense,
                self.account.username.as_str(),
                Some(category.to_string()),
                &amount,
            ),
        );
        Ok(notices)
    }

    /// Set or replace a category budget
    ///
    /// Returns the previous limit, if there was one.
    pub fn set_budget(&mut self, category: &str, amount: Money) -> FinanceResult<Option<Money>> {
        let previous = self.account.ledger.set_budget(category, amount)?;
        debug!(username = %self.account.username, category, %amount, "Budget set");

        let entry = match previous {
            Some(before) => AuditEntry::update(
                EntityType::Budget,
                self.account.username.as_str(),
                Some(category.to_string()),
                &before,
                &amount,
            ),
            None => AuditEntry::create(
                EntityType::Budget,
                self.account.username.as_str(),
                Some(category.to_string()),
                &amount,
            ),
        };
        record_audit(self.audit, entry);
        Ok(previous)
    }

    pub fn remaining_budget(&self, category: &str) -> FinanceResult<Option<Money>> {
        self.account.ledger.remaining_budget(category)
    }

    pub fn summary(&self) -> FinanceResult<LedgerSummary> {
        self.account.ledger.summary()
    }

    /// Write the current summary to `path`
    pub fn export_summary(
        &self,
        path: &Path,
        labels: &SummaryLabels,
    ) -> FinanceResult<SummaryFormat> {
        let summary = self.summary()?;
        let format = export_summary_to_file(path, &self.account.username, &summary, labels)?;
        debug!(path = %path.display(), ?format, "Summary exported");
        Ok(format)
    }
}
