//! Summary formatting for terminal output and text exports
//!
//! The layout is one line per field: total income, total expense, a budgets
//! header, then one line per budgeted category.

use crate::config::SummaryLabels;
use crate::models::LedgerSummary;

/// Render a ledger summary as text, one line per field, each ending in `\n`
pub fn format_summary(summary: &LedgerSummary, labels: &SummaryLabels) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", labels.total_income, summary.total_income));
    output.push_str(&format!("{}: {}\n", labels.total_expense, summary.total_expense));
    output.push_str(&format!("{}:\n", labels.budgets_header));

    for (category, remaining) in &summary.budgets {
        output.push_str(&format!(
            "{}: {}: {}\n",
            category, labels.remaining_budget, remaining
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ledger, Money};

    #[test]
    fn test_format_summary_default_labels() {
        let mut ledger = Ledger::new();
        ledger.add_income("salary", Money::from_cents(100_000)).unwrap();
        ledger.set_budget("food", Money::from_cents(10_000)).unwrap();
        ledger.set_budget("fun", Money::from_cents(2_000)).unwrap();
        ledger.add_expense("food", Money::from_cents(11_000)).unwrap();

        let text = format_summary(&ledger.summary().unwrap(), &SummaryLabels::default());

        assert_eq!(
            text,
            "Общий доход: 1000.00\n\
             Общий расход: 110.00\n\
             Бюджеты:\n\
             food: Остаток бюджета: -10.00\n\
             fun: Остаток бюджета: 20.00\n"
        );
    }

    #[test]
    fn test_format_summary_without_budgets() {
        let ledger = Ledger::new();
        let labels = SummaryLabels {
            total_income: "Income".into(),
            total_expense: "Expenses".into(),
            budgets_header: "Budgets".into(),
            remaining_budget: "Remaining".into(),
        };

        let text = format_summary(&ledger.summary().unwrap(), &labels);
        assert_eq!(text, "Income: 0.00\nExpenses: 0.00\nBudgets:\n");
    }
}
