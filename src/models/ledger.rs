//! Ledger model
//!
//! A ledger is the per-account record of categorized incomes and expenses,
//! per-category budget limits and the running balance. Income and expense
//! history is append-only; budgets are replaced wholesale on every set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{FinanceError, FinanceResult};

/// Advisory signal raised by an expense. Notices never change ledger state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerNotice {
    /// Spending in a budgeted category went past its limit
    BudgetOverrun { category: String, remaining: Money },
    /// Total expenses now exceed total income
    Deficit { balance: Money },
}

impl fmt::Display for LedgerNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerNotice::BudgetOverrun { category, remaining } => write!(
                f,
                "Warning: budget exceeded for category '{}' (remaining {})",
                category, remaining
            ),
            LedgerNotice::Deficit { balance } => {
                write!(f, "Warning: expenses exceed income (balance {})", balance)
            }
        }
    }
}

/// Totals plus remaining budget for every budgeted category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub total_income: Money,
    pub total_expense: Money,
    pub budgets: BTreeMap<String, Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Income minus expenses, maintained incrementally
    balance: Money,

    #[serde(default)]
    incomes: BTreeMap<String, Vec<Money>>,

    #[serde(default)]
    expenses: BTreeMap<String, Vec<Money>>,

    /// Only categories with an explicitly set limit appear here
    #[serde(default)]
    budgets: BTreeMap<String, Money>,
}

impl Ledger {
    /// Create an empty ledger with a zero balance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Record an income entry
    pub fn add_income(&mut self, category: &str, amount: Money) -> FinanceResult<()> {
        require_category(category)?;
        if !amount.is_positive() {
            return Err(FinanceError::invalid_income(amount));
        }
        let balance = self.balance.checked_add(amount)?;

        self.incomes
            .entry(category.to_string())
            .or_default()
            .push(amount);
        self.balance = balance;
        Ok(())
    }

    /// Record an expense entry
    ///
    /// Returns the advisory notices triggered by this expense: a budget
    /// overrun when the category's remaining budget is now negative, and a
    /// deficit when the balance is now negative. The expense is recorded
    /// either way.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount: Money,
    ) -> FinanceResult<Vec<LedgerNotice>> {
        require_category(category)?;
        if !amount.is_positive() {
            return Err(FinanceError::invalid_expense(amount));
        }
        let balance = self.balance.checked_sub(amount)?;
        let remaining = match self.budgets.get(category) {
            Some(limit) => {
                let spent = Money::checked_sum(self.expense_entries(category))?
                    .checked_add(amount)?;
                Some(limit.checked_sub(spent)?)
            }
            None => None,
        };

        self.expenses
            .entry(category.to_string())
            .or_default()
            .push(amount);
        self.balance = balance;

        let mut notices = Vec::new();

        if let Some(remaining) = remaining.filter(Money::is_negative) {
            notices.push(LedgerNotice::BudgetOverrun {
                category: category.to_string(),
                remaining,
            });
        }

        if self.balance.is_negative() {
            notices.push(LedgerNotice::Deficit {
                balance: self.balance,
            });
        }

        Ok(notices)
    }

    /// Set or replace the budget limit for a category
    ///
    /// Returns the previous limit, if any.
    pub fn set_budget(&mut self, category: &str, amount: Money) -> FinanceResult<Option<Money>> {
        require_category(category)?;
        if !amount.is_positive() {
            return Err(FinanceError::invalid_budget(amount));
        }
        Ok(self.budgets.insert(category.to_string(), amount))
    }

    /// Sum of every income entry across all categories
    pub fn total_income(&self) -> FinanceResult<Money> {
        Money::checked_sum(self.incomes.values().flatten())
    }

    /// Sum of every expense entry across all categories
    pub fn total_expense(&self) -> FinanceResult<Money> {
        Money::checked_sum(self.expenses.values().flatten())
    }

    /// Budget limit minus the category's total expenses
    ///
    /// `None` when no budget was ever set for the category. The result may be
    /// negative once spending passes the limit.
    pub fn remaining_budget(&self, category: &str) -> FinanceResult<Option<Money>> {
        match self.budgets.get(category) {
            Some(limit) => {
                let spent = Money::checked_sum(self.expense_entries(category))?;
                Ok(Some(limit.checked_sub(spent)?))
            }
            None => Ok(None),
        }
    }

    /// Income total restricted to the given categories
    ///
    /// Categories without entries contribute nothing.
    pub fn total_income_for_categories<S: AsRef<str>>(
        &self,
        categories: &[S],
    ) -> FinanceResult<Money> {
        Money::checked_sum(
            categories
                .iter()
                .flat_map(|c| self.income_entries(c.as_ref())),
        )
    }

    /// Expense total restricted to the given categories
    pub fn total_expense_for_categories<S: AsRef<str>>(
        &self,
        categories: &[S],
    ) -> FinanceResult<Money> {
        Money::checked_sum(
            categories
                .iter()
                .flat_map(|c| self.expense_entries(c.as_ref())),
        )
    }

    pub fn summary(&self) -> FinanceResult<LedgerSummary> {
        let mut budgets = BTreeMap::new();
        for category in self.budgets.keys() {
            if let Some(remaining) = self.remaining_budget(category)? {
                budgets.insert(category.clone(), remaining);
            }
        }

        Ok(LedgerSummary {
            total_income: self.total_income()?,
            total_expense: self.total_expense()?,
            budgets,
        })
    }

    /// Income entries for a category in the order they were recorded
    pub fn income_entries(&self, category: &str) -> &[Money] {
        self.incomes.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Expense entries for a category in the order they were recorded
    pub fn expense_entries(&self, category: &str) -> &[Money] {
        self.expenses.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn budget(&self, category: &str) -> Option<Money> {
        self.budgets.get(category).copied()
    }

    /// Every category that has income, expenses or a budget, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .incomes
            .keys()
            .chain(self.expenses.keys())
            .chain(self.budgets.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// True when nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty() && self.budgets.is_empty()
    }

    /// Balance computed from scratch from the stored entries
    pub fn recomputed_balance(&self) -> FinanceResult<Money> {
        self.total_income()?.checked_sub(self.total_expense()?)
    }

    /// Verify the invariants a ledger built through the public API upholds
    ///
    /// Used on data read back from disk.
    pub fn check_integrity(&self) -> Result<(), String> {
        for (kind, entries) in [("income", &self.incomes), ("expense", &self.expenses)] {
            for (category, amounts) in entries {
                if let Some(bad) = amounts.iter().find(|a| !a.is_positive()) {
                    return Err(format!(
                        "non-positive {} {} in category '{}'",
                        kind, bad, category
                    ));
                }
            }
        }

        if let Some((category, limit)) = self.budgets.iter().find(|(_, l)| !l.is_positive()) {
            return Err(format!(
                "non-positive budget {} for category '{}'",
                limit, category
            ));
        }

        let recomputed = self.recomputed_balance().map_err(|e| e.to_string())?;
        if recomputed != self.balance {
            return Err(format!(
                "stored balance {} does not match entries ({})",
                self.balance, recomputed
            ));
        }

        Ok(())
    }
}

fn require_category(category: &str) -> FinanceResult<()> {
    if category.trim().is_empty() {
        return Err(FinanceError::EmptyField("Category"));
    }
    Ok(())
}
