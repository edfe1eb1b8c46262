//! Statement aggregation service.

use rust_decimal::Decimal;

use crate::chart::AccountCategory;

use super::types::{
    BalanceSheet, IncomeStatement, MergedRow, TrialBalanceTotals, within_tolerance,
};

/// Service aggregating merged rows into financial statements.
pub struct StatementService;

impl StatementService {
    /// Sums coerced debits and credits for the balance check display.
    #[must_use]
    pub fn trial_balance_totals(rows: &[MergedRow]) -> TrialBalanceTotals {
        let total_debit = rows.iter().map(|row| row.debit).sum();
        let total_credit = rows.iter().map(|row| row.credit).sum();
        TrialBalanceTotals::new(total_debit, total_credit)
    }

    /// Builds the income statement from merged rows.
    ///
    /// Each sum selects one category bucket; `Unassigned` rows match no
    /// bucket and are excluded from every total.
    #[must_use]
    pub fn income_statement(rows: &[MergedRow]) -> IncomeStatement {
        let revenues = Self::sum_category(rows, AccountCategory::Revenue);
        let cost_of_goods_sold = Self::sum_category(rows, AccountCategory::CostOfGoodsSold);
        let expenses = Self::sum_category(rows, AccountCategory::Expense);
        let other_income = Self::sum_category(rows, AccountCategory::OtherIncome);
        let other_expense = Self::sum_category(rows, AccountCategory::OtherExpense);

        let gross_profit = revenues - cost_of_goods_sold;
        let operating_profit = gross_profit - expenses;
        let net_income = operating_profit + other_income - other_expense;

        IncomeStatement {
            revenues,
            cost_of_goods_sold,
            gross_profit,
            expenses,
            operating_profit,
            other_income,
            other_expense,
            net_income,
        }
    }

    /// Builds the balance sheet from merged rows and the carried net income.
    ///
    /// Net income is the only value flowing in from the income statement,
    /// closing-entry emulation without an explicit ledger. An identity
    /// violation sets `is_balanced` to false but never fails.
    #[must_use]
    pub fn balance_sheet(rows: &[MergedRow], net_income: Decimal) -> BalanceSheet {
        let assets = Self::sum_category(rows, AccountCategory::Asset);
        let liabilities = Self::sum_category(rows, AccountCategory::Liability);
        let equity_raw = Self::sum_category(rows, AccountCategory::Equity);
        let drawings = Self::sum_category(rows, AccountCategory::Drawings);

        let ending_equity = equity_raw + net_income - drawings;
        let liabilities_and_equity = liabilities + ending_equity;

        BalanceSheet {
            assets,
            liabilities,
            equity_raw,
            drawings,
            net_income,
            ending_equity,
            liabilities_and_equity,
            is_balanced: within_tolerance(assets, liabilities_and_equity),
        }
    }

    /// Rows whose category aggregates into neither statement.
    ///
    /// These are the reconciliation gap the caller should flag: their
    /// balances appear in no total.
    #[must_use]
    pub fn unclassified_rows(rows: &[MergedRow]) -> Vec<&MergedRow> {
        rows.iter()
            .filter(|row| row.category.statement().is_none())
            .collect()
    }

    fn sum_category(rows: &[MergedRow], category: AccountCategory) -> Decimal {
        rows.iter()
            .filter(|row| row.category == category)
            .map(|row| row.balance)
            .sum()
    }
}
