//! Statement pipeline data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chart::AccountCategory;

/// Whether two totals agree within the display tolerance.
///
/// Keyed-in trial balances legitimately carry rounding dust; exact equality
/// would flag them all. 0.01 is the tolerance the balance checks surface.
pub(crate) fn within_tolerance(left: Decimal, right: Decimal) -> bool {
    (left - right).abs() < Decimal::new(1, 2)
}

/// A trial-balance row as entered by the user.
///
/// Debit and credit hold the raw cell text; coercion to numbers happens
/// during the merge so one bad cell never rejects the row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceEntry {
    /// Account name, matched against the chart of accounts.
    pub account_name: String,
    /// Optional manual category; takes priority over the chart match.
    pub category_override: Option<AccountCategory>,
    /// Raw debit cell text.
    pub debit: String,
    /// Raw credit cell text.
    pub credit: String,
}

impl TrialBalanceEntry {
    /// Creates a new trial-balance entry.
    #[must_use]
    pub fn new(
        account_name: impl Into<String>,
        category_override: Option<AccountCategory>,
        debit: impl Into<String>,
        credit: impl Into<String>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            category_override,
            debit: debit.into(),
            credit: credit.into(),
        }
    }
}

/// A trial-balance row joined with its resolved category and signed balance.
///
/// Derived per recomputation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRow {
    /// Account name from the trial balance.
    pub account_name: String,
    /// Resolved category: override, else chart match, else `Unassigned`.
    pub category: AccountCategory,
    /// Coerced debit amount.
    pub debit: Decimal,
    /// True when the debit cell was unreadable and repaired to zero.
    pub debit_defaulted: bool,
    /// Coerced credit amount.
    pub credit: Decimal,
    /// True when the credit cell was unreadable and repaired to zero.
    pub credit_defaulted: bool,
    /// Signed balance per the category's normal-balance rule.
    pub balance: Decimal,
}

/// Trial balance totals for the balance check display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits within tolerance.
    pub is_balanced: bool,
}

impl TrialBalanceTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(total_debit: Decimal, total_credit: Decimal) -> Self {
        Self {
            total_debit,
            total_credit,
            is_balanced: within_tolerance(total_debit, total_credit),
        }
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_debit - self.total_credit
    }
}

/// Income statement derived from merged trial-balance rows.
///
/// Recomputed on every request; carries no independent lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Total revenue balances.
    pub revenues: Decimal,
    /// Total cost of goods sold.
    pub cost_of_goods_sold: Decimal,
    /// Revenues minus COGS.
    pub gross_profit: Decimal,
    /// Total operating expenses.
    pub expenses: Decimal,
    /// Gross profit minus expenses.
    pub operating_profit: Decimal,
    /// Non-operating income.
    pub other_income: Decimal,
    /// Non-operating expense.
    pub other_expense: Decimal,
    /// Operating profit plus other income minus other expense.
    pub net_income: Decimal,
}

/// Balance sheet derived from merged rows plus the carried net income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Total asset balances.
    pub assets: Decimal,
    /// Total liability balances.
    pub liabilities: Decimal,
    /// Equity balances before closing adjustments.
    pub equity_raw: Decimal,
    /// Owner drawings.
    pub drawings: Decimal,
    /// Net income carried from the income statement.
    pub net_income: Decimal,
    /// Equity raw plus net income minus drawings.
    pub ending_equity: Decimal,
    /// Liabilities plus ending equity.
    pub liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity within tolerance.
    pub is_balanced: bool,
}
