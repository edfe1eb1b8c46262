//! Spreadsheet export for Tallybook financial reports.
//!
//! Serializes the trial balance, chart of accounts, and both derived
//! statements into a four-sheet xlsx workbook. Inputs are borrowed and never
//! mutated; empty tables still produce header-only sheets.

pub mod error;

pub use error::ExportError;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Workbook, Worksheet};

use tallybook_core::chart::AccountRecord;
use tallybook_core::statements::{BalanceSheet, IncomeStatement, TrialBalanceEntry};

/// Download file name for the exported workbook.
pub const EXPORT_FILE_NAME: &str = "financial_reports.xlsx";

/// MIME type of the exported workbook.
pub const EXPORT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serializes the four report tables into a multi-sheet spreadsheet.
pub struct ReportExporter;

impl ReportExporter {
    /// Builds the workbook and returns the xlsx bytes.
    ///
    /// Sheets in order: Trial Balance and Chart of Accounts as entered, then
    /// the two statements as fixed label/amount layouts.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the spreadsheet writer fails.
    pub fn export(
        trial_balance: &[TrialBalanceEntry],
        chart_of_accounts: &[AccountRecord],
        income_statement: &IncomeStatement,
        balance_sheet: &BalanceSheet,
    ) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();

        Self::write_trial_balance(workbook.add_worksheet(), trial_balance)?;
        Self::write_chart(workbook.add_worksheet(), chart_of_accounts)?;
        Self::write_income_statement(workbook.add_worksheet(), income_statement)?;
        Self::write_balance_sheet(workbook.add_worksheet(), balance_sheet)?;

        Ok(workbook.save_to_buffer()?)
    }

    fn write_trial_balance(
        sheet: &mut Worksheet,
        entries: &[TrialBalanceEntry],
    ) -> Result<(), ExportError> {
        sheet.set_name("Trial Balance")?;
        Self::write_headers(sheet, &["Account Name", "Account Category", "Debit", "Credit"])?;

        let mut row = 1;
        for entry in entries {
            let category = entry
                .category_override
                .map(|c| c.to_string())
                .unwrap_or_default();
            sheet.write_string(row, 0, &entry.account_name)?;
            sheet.write_string(row, 1, category)?;
            sheet.write_string(row, 2, &entry.debit)?;
            sheet.write_string(row, 3, &entry.credit)?;
            row += 1;
        }
        Ok(())
    }

    fn write_chart(
        sheet: &mut Worksheet,
        accounts: &[AccountRecord],
    ) -> Result<(), ExportError> {
        sheet.set_name("Chart of Accounts")?;
        Self::write_headers(sheet, &["Account Code", "Account Name", "Category"])?;

        let mut row = 1;
        for account in accounts {
            sheet.write_string(row, 0, &account.code)?;
            sheet.write_string(row, 1, &account.name)?;
            sheet.write_string(row, 2, account.category.to_string())?;
            row += 1;
        }
        Ok(())
    }

    fn write_income_statement(
        sheet: &mut Worksheet,
        statement: &IncomeStatement,
    ) -> Result<(), ExportError> {
        sheet.set_name("Income Statement")?;
        let items = [
            ("Revenues", statement.revenues),
            ("COGS", statement.cost_of_goods_sold),
            ("Gross Profit", statement.gross_profit),
            ("Expenses", statement.expenses),
            ("Operating Profit", statement.operating_profit),
            ("Other Income", statement.other_income),
            ("Other Expense", statement.other_expense),
            ("Net Income", statement.net_income),
        ];
        Self::write_statement_sheet(sheet, &items)
    }

    fn write_balance_sheet(
        sheet: &mut Worksheet,
        statement: &BalanceSheet,
    ) -> Result<(), ExportError> {
        sheet.set_name("Balance Sheet")?;
        let items = [
            ("Assets", statement.assets),
            ("Liabilities", statement.liabilities),
            ("Equity (Raw)", statement.equity_raw),
            ("Drawings", statement.drawings),
            ("Net Income", statement.net_income),
            ("Ending Equity", statement.ending_equity),
            ("Liabilities + Equity", statement.liabilities_and_equity),
        ];
        Self::write_statement_sheet(sheet, &items)
    }

    fn write_statement_sheet(
        sheet: &mut Worksheet,
        items: &[(&str, Decimal)],
    ) -> Result<(), ExportError> {
        Self::write_headers(sheet, &["Item", "Amount"])?;
        let mut row = 1;
        for (label, value) in items {
            sheet.write_string(row, 0, *label)?;
            sheet.write_number(row, 1, value.to_f64().unwrap_or(0.0))?;
            row += 1;
        }
        Ok(())
    }

    fn write_headers(sheet: &mut Worksheet, headers: &[&str]) -> Result<(), ExportError> {
        let mut col = 0;
        for header in headers {
            sheet.write_string(0, col, *header)?;
            col += 1;
        }
        Ok(())
    }
}
