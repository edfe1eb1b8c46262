//! Fixed-order display rendering for the derived statements.

use tallybook_shared::format;

use super::types::{BalanceSheet, IncomeStatement};

/// A rendered display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Line label.
    pub label: &'static str,
    /// Formatted amount: two decimals, thousands separators.
    pub amount: String,
}

impl ReportLine {
    fn new(label: &'static str, value: rust_decimal::Decimal) -> Self {
        Self {
            label,
            amount: format::amount(value),
        }
    }
}

/// Income statement lines in the fixed display order.
#[must_use]
pub fn income_statement_lines(statement: &IncomeStatement) -> Vec<ReportLine> {
    vec![
        ReportLine::new("Revenues", statement.revenues),
        ReportLine::new("COGS", statement.cost_of_goods_sold),
        ReportLine::new("Gross Profit", statement.gross_profit),
        ReportLine::new("Expenses", statement.expenses),
        ReportLine::new("Operating Profit", statement.operating_profit),
        ReportLine::new("Other Income", statement.other_income),
        ReportLine::new("Other Expense", statement.other_expense),
        ReportLine::new("Net Income", statement.net_income),
    ]
}

/// Balance sheet lines in the fixed display order.
#[must_use]
pub fn balance_sheet_lines(statement: &BalanceSheet) -> Vec<ReportLine> {
    vec![
        ReportLine::new("Assets", statement.assets),
        ReportLine::new("Liabilities", statement.liabilities),
        ReportLine::new("Equity (Raw)", statement.equity_raw),
        ReportLine::new("Drawings", statement.drawings),
        ReportLine::new("Net Income", statement.net_income),
        ReportLine::new("Ending Equity", statement.ending_equity),
        ReportLine::new("Liabilities + Equity", statement.liabilities_and_equity),
    ]
}
