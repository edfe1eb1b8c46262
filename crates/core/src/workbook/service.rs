//! Workbook session operations.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisService, FinancialRatios};
use crate::chart::{AccountRecord, default_accounts};
use crate::statements::{
    MergedRow, StatementService, TrialBalanceEntry, TrialBalanceTotals, merge,
};

use super::error::WorkbookError;
use super::types::{CompanySettings, FinancialStatements};

/// Session state driving the statement pipeline.
///
/// Owns the editable tables. All operations run synchronously to completion;
/// concurrent sessions get isolated instances, never shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    settings: CompanySettings,
    chart_of_accounts: Vec<AccountRecord>,
    trial_balance: Vec<TrialBalanceEntry>,
}

impl Workbook {
    /// Creates a workbook seeded with the default chart for the settings'
    /// company type.
    #[must_use]
    pub fn new(settings: CompanySettings) -> Self {
        let chart_of_accounts = default_accounts(settings.company_type);
        Self {
            settings,
            chart_of_accounts,
            trial_balance: Vec::new(),
        }
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &CompanySettings {
        &self.settings
    }

    /// Current chart of accounts.
    #[must_use]
    pub fn chart_of_accounts(&self) -> &[AccountRecord] {
        &self.chart_of_accounts
    }

    /// Current trial balance.
    #[must_use]
    pub fn trial_balance(&self) -> &[TrialBalanceEntry] {
        &self.trial_balance
    }

    /// Saves new settings.
    ///
    /// A company-type change replaces the whole chart of accounts with fresh
    /// defaults, discarding any edits. Returns true when that happened so the
    /// caller can warn the user; there is no confirmation gate and no undo.
    pub fn update_settings(&mut self, settings: CompanySettings) -> bool {
        let type_changed = settings.company_type != self.settings.company_type;
        if type_changed {
            tracing::warn!(
                from = ?self.settings.company_type,
                to = ?settings.company_type,
                "company type changed, replacing chart of accounts with defaults"
            );
            self.chart_of_accounts = default_accounts(settings.company_type);
        }
        self.settings = settings;
        type_changed
    }

    /// Replaces the chart of accounts with edited rows.
    pub fn set_chart_of_accounts(&mut self, accounts: Vec<AccountRecord>) {
        self.chart_of_accounts = accounts;
    }

    /// Replaces the trial balance with edited rows.
    pub fn set_trial_balance(&mut self, entries: Vec<TrialBalanceEntry>) {
        self.trial_balance = entries;
    }

    /// Merged view of the current trial balance.
    #[must_use]
    pub fn merged_rows(&self) -> Vec<MergedRow> {
        merge(&self.trial_balance, &self.chart_of_accounts)
    }

    /// Debit/credit totals for the balance check display.
    #[must_use]
    pub fn totals(&self) -> TrialBalanceTotals {
        StatementService::trial_balance_totals(&self.merged_rows())
    }

    /// Derives both statements from the current state.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbookError::EmptyTrialBalance`] when no rows have been
    /// entered, instead of computing degenerate all-zero statements.
    pub fn statements(&self) -> Result<FinancialStatements, WorkbookError> {
        if self.trial_balance.is_empty() {
            return Err(WorkbookError::EmptyTrialBalance);
        }

        let rows = self.merged_rows();
        let income_statement = StatementService::income_statement(&rows);
        let balance_sheet = StatementService::balance_sheet(&rows, income_statement.net_income);

        let unclassified = StatementService::unclassified_rows(&rows);
        if !unclassified.is_empty() {
            tracing::warn!(
                count = unclassified.len(),
                "unclassified trial-balance rows are excluded from both statements"
            );
        }

        if !balance_sheet.is_balanced {
            tracing::warn!(
                assets = %balance_sheet.assets,
                liabilities_and_equity = %balance_sheet.liabilities_and_equity,
                "assets do not equal liabilities plus equity, check the trial balance or classification"
            );
        }

        Ok(FinancialStatements {
            income_statement,
            balance_sheet,
        })
    }

    /// Headline ratios for the analysis view.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbookError::EmptyTrialBalance`] when no rows have been
    /// entered.
    pub fn ratios(&self) -> Result<FinancialRatios, WorkbookError> {
        let statements = self.statements()?;
        Ok(AnalysisService::ratios(
            &statements.income_statement,
            &statements.balance_sheet,
        ))
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new(CompanySettings::default())
    }
}
