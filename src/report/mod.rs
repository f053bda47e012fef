// ============================================================================
// Report Module
// Totals and plain-text rendering for display
// ============================================================================

use crate::domain::{Account, Budget, Category};
use crate::numeric::{Money, MoneyResult};
use std::fmt;

/// Totals across the accounts and categories of one budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetSummary {
    /// Sum of open account balances
    pub account_balance: Money,

    /// Sum of visible category balances
    pub category_balance: Money,

    /// Sum of visible category assignments
    pub budgeted: Money,

    pub open_accounts: usize,
    pub visible_categories: usize,
}

impl BudgetSummary {
    /// Aggregate records, excluding closed accounts and hidden categories.
    ///
    /// # Errors
    /// Returns `Overflow` if any running total leaves the representable range.
    pub fn from_records(accounts: &[Account], categories: &[Category]) -> MoneyResult<Self> {
        let mut summary = Self::default();

        for account in accounts.iter().filter(|a| !a.closed) {
            summary.account_balance.add_assign_checked(account.balance)?;
            summary.open_accounts += 1;
        }

        for category in categories.iter().filter(|c| !c.hidden) {
            summary.category_balance.add_assign_checked(category.balance)?;
            summary.budgeted.add_assign_checked(category.budgeted)?;
            summary.visible_categories += 1;
        }

        Ok(summary)
    }

    /// Money in accounts not yet given a job (`accounts - category balances`).
    pub fn unassigned(&self) -> MoneyResult<Money> {
        self.account_balance.checked_sub(self.category_balance)
    }
}

impl fmt::Display for BudgetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Accounts ({}): {}",
            self.open_accounts, self.account_balance
        )?;
        writeln!(
            f,
            "Categories ({}): {}",
            self.visible_categories, self.category_balance
        )?;
        write!(f, "Budgeted: {}", self.budgeted)
    }
}

/// Render the budget, account and category listing shown after login.
pub fn render_report(budgets: &[Budget], accounts: &[Account], categories: &[Category]) -> String {
    let mut out = String::from("BUDGETS");

    for budget in budgets {
        out.push('\n');
        out.push_str(&budget.name);
    }
    for account in accounts {
        out.push_str(&format!("\n{}: {}", account.name, account.balance));
    }
    for category in categories {
        out.push_str(&format!("\n{}: {}", category.name, category.balance));
    }

    out
}
