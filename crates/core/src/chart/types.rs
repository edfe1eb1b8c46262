//! Chart of accounts domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company type selecting the default chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    /// Service company: no inventory or cost-of-goods accounts.
    Service,
    /// Trading company: carries inventory, sales returns, and COGS.
    Trading,
}

/// Normal balance side of an account category.
///
/// Determines how a debit/credit pair reduces to a signed balance:
/// debit-normal accounts as debit minus credit, credit-normal accounts as
/// credit minus debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal (Asset, Expense, COGS, Drawings).
    Debit,
    /// Credit-normal (Liability, Equity, Revenue, everything else).
    Credit,
}

impl NormalBalance {
    /// Reduces a debit/credit pair to a signed balance.
    ///
    /// The single balance rule shared by both statements.
    #[must_use]
    pub fn signed_balance(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

/// Statement a category's balances aggregate into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Revenue and expense buckets.
    IncomeStatement,
    /// Asset, liability, and equity buckets.
    BalanceSheet,
}

/// Account classification vocabulary.
///
/// `Unassigned` marks trial-balance rows with no chart match and no manual
/// override. It is a reachable, credit-normal bucket that aggregates into
/// neither statement, so the user notices the gap and fixes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    /// Economic resources (cash, receivables, inventory).
    Asset,
    /// Obligations to outsiders.
    Liability,
    /// Owner capital accounts, before closing adjustments.
    Equity,
    /// Owner withdrawals; reduce ending equity.
    Drawings,
    /// Operating revenue.
    Revenue,
    /// Cost of goods sold.
    CostOfGoodsSold,
    /// Operating expenses.
    Expense,
    /// Non-operating income, reachable only via per-row override.
    OtherIncome,
    /// Non-operating expense, reachable only via per-row override.
    OtherExpense,
    /// No chart match and no override.
    Unassigned,
}

impl AccountCategory {
    /// Normal balance side for this category.
    ///
    /// Adding a category means extending this table and [`Self::statement`],
    /// not adding a conditional branch elsewhere.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense | Self::CostOfGoodsSold | Self::Drawings => {
                NormalBalance::Debit
            }
            Self::Liability
            | Self::Equity
            | Self::Revenue
            | Self::OtherIncome
            | Self::OtherExpense
            | Self::Unassigned => NormalBalance::Credit,
        }
    }

    /// Statement this category aggregates into; `None` for `Unassigned`.
    #[must_use]
    pub const fn statement(self) -> Option<StatementKind> {
        match self {
            Self::Revenue
            | Self::CostOfGoodsSold
            | Self::Expense
            | Self::OtherIncome
            | Self::OtherExpense => Some(StatementKind::IncomeStatement),
            Self::Asset | Self::Liability | Self::Equity | Self::Drawings => {
                Some(StatementKind::BalanceSheet)
            }
            Self::Unassigned => None,
        }
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "Asset"),
            Self::Liability => write!(f, "Liability"),
            Self::Equity => write!(f, "Equity"),
            Self::Drawings => write!(f, "Drawings"),
            Self::Revenue => write!(f, "Revenue"),
            Self::CostOfGoodsSold => write!(f, "COGS"),
            Self::Expense => write!(f, "Expense"),
            Self::OtherIncome => write!(f, "Other Income"),
            Self::OtherExpense => write!(f, "Other Expense"),
            Self::Unassigned => write!(f, "Unassigned"),
        }
    }
}

impl std::str::FromStr for AccountCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "drawings" => Ok(Self::Drawings),
            "revenue" => Ok(Self::Revenue),
            "cogs" | "cost of goods sold" => Ok(Self::CostOfGoodsSold),
            "expense" => Ok(Self::Expense),
            "other income" => Ok(Self::OtherIncome),
            "other expense" => Ok(Self::OtherExpense),
            "unassigned" => Ok(Self::Unassigned),
            _ => Err(format!("Unknown account category: {s}")),
        }
    }
}

/// A chart-of-accounts row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Account code, display only.
    pub code: String,
    /// Account name, the key trial-balance rows match on.
    pub name: String,
    /// Category classification.
    pub category: AccountCategory,
}

impl AccountRecord {
    /// Creates a new account record.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: AccountCategory,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[rstest]
    #[case(AccountCategory::Asset, NormalBalance::Debit)]
    #[case(AccountCategory::Expense, NormalBalance::Debit)]
    #[case(AccountCategory::CostOfGoodsSold, NormalBalance::Debit)]
    #[case(AccountCategory::Drawings, NormalBalance::Debit)]
    #[case(AccountCategory::Liability, NormalBalance::Credit)]
    #[case(AccountCategory::Equity, NormalBalance::Credit)]
    #[case(AccountCategory::Revenue, NormalBalance::Credit)]
    #[case(AccountCategory::OtherIncome, NormalBalance::Credit)]
    #[case(AccountCategory::OtherExpense, NormalBalance::Credit)]
    #[case(AccountCategory::Unassigned, NormalBalance::Credit)]
    fn normal_balance_table(#[case] category: AccountCategory, #[case] expected: NormalBalance) {
        assert_eq!(category.normal_balance(), expected);
    }

    #[test]
    fn signed_balance_sign_law() {
        // Asset with debit=100, credit=30 and Liability with debit=30,
        // credit=100 both land at 70.
        assert_eq!(
            NormalBalance::Debit.signed_balance(dec!(100), dec!(30)),
            dec!(70)
        );
        assert_eq!(
            NormalBalance::Credit.signed_balance(dec!(30), dec!(100)),
            dec!(70)
        );
    }

    #[rstest]
    #[case(AccountCategory::Revenue, Some(StatementKind::IncomeStatement))]
    #[case(AccountCategory::CostOfGoodsSold, Some(StatementKind::IncomeStatement))]
    #[case(AccountCategory::Expense, Some(StatementKind::IncomeStatement))]
    #[case(AccountCategory::OtherIncome, Some(StatementKind::IncomeStatement))]
    #[case(AccountCategory::OtherExpense, Some(StatementKind::IncomeStatement))]
    #[case(AccountCategory::Asset, Some(StatementKind::BalanceSheet))]
    #[case(AccountCategory::Liability, Some(StatementKind::BalanceSheet))]
    #[case(AccountCategory::Equity, Some(StatementKind::BalanceSheet))]
    #[case(AccountCategory::Drawings, Some(StatementKind::BalanceSheet))]
    #[case(AccountCategory::Unassigned, None)]
    fn statement_table(
        #[case] category: AccountCategory,
        #[case] expected: Option<StatementKind>,
    ) {
        assert_eq!(category.statement(), expected);
    }

    #[test]
    fn category_display_round_trip() {
        let categories = [
            AccountCategory::Asset,
            AccountCategory::Liability,
            AccountCategory::Equity,
            AccountCategory::Drawings,
            AccountCategory::Revenue,
            AccountCategory::CostOfGoodsSold,
            AccountCategory::Expense,
            AccountCategory::OtherIncome,
            AccountCategory::OtherExpense,
            AccountCategory::Unassigned,
        ];
        for category in categories {
            let parsed = AccountCategory::from_str(&category.to_string()).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn category_from_str_is_case_insensitive() {
        assert_eq!(
            AccountCategory::from_str("cogs").unwrap(),
            AccountCategory::CostOfGoodsSold
        );
        assert_eq!(
            AccountCategory::from_str("Cost of Goods Sold").unwrap(),
            AccountCategory::CostOfGoodsSold
        );
        assert_eq!(
            AccountCategory::from_str("OTHER INCOME").unwrap(),
            AccountCategory::OtherIncome
        );
        assert!(AccountCategory::from_str("inventory").is_err());
        assert!(AccountCategory::from_str("").is_err());
    }
}
