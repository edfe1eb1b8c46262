//! Ratio calculations.

use rust_decimal::Decimal;

use tallybook_shared::format;

use crate::statements::{BalanceSheet, IncomeStatement, ReportLine};

use super::types::FinancialRatios;

/// Service computing financial ratios from the derived statements.
pub struct AnalysisService;

impl AnalysisService {
    /// Computes margin and leverage ratios.
    ///
    /// Margins are undefined without revenue. Debt-to-assets is undefined
    /// without liabilities, and zero when liabilities exist but assets sum
    /// to zero.
    #[must_use]
    pub fn ratios(
        income_statement: &IncomeStatement,
        balance_sheet: &BalanceSheet,
    ) -> FinancialRatios {
        let (gross_margin, net_margin) = if income_statement.revenues.is_zero() {
            (None, None)
        } else {
            (
                Some(income_statement.gross_profit / income_statement.revenues),
                Some(income_statement.net_income / income_statement.revenues),
            )
        };

        let debt_to_assets = if balance_sheet.liabilities.is_zero() {
            None
        } else if balance_sheet.assets.is_zero() {
            Some(Decimal::ZERO)
        } else {
            Some(balance_sheet.liabilities / balance_sheet.assets)
        };

        FinancialRatios {
            gross_margin,
            net_margin,
            debt_to_assets,
        }
    }

    /// Renders the defined ratios as percentage lines for the analysis view.
    ///
    /// Undefined ratios are omitted rather than shown as zero.
    #[must_use]
    pub fn ratio_lines(ratios: &FinancialRatios) -> Vec<ReportLine> {
        let mut lines = Vec::new();
        if let Some(gross_margin) = ratios.gross_margin {
            lines.push(ReportLine {
                label: "Gross Margin",
                amount: format::percent(gross_margin),
            });
        }
        if let Some(net_margin) = ratios.net_margin {
            lines.push(ReportLine {
                label: "Net Margin",
                amount: format::percent(net_margin),
            });
        }
        if let Some(debt_to_assets) = ratios.debt_to_assets {
            lines.push(ReportLine {
                label: "Debt to Assets",
                amount: format::percent(debt_to_assets),
            });
        }
        lines
    }
}
