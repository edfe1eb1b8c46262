//! Workbook session types.

use serde::{Deserialize, Serialize};

use crate::chart::CompanyType;
use crate::statements::{BalanceSheet, IncomeStatement};

/// Company settings for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    /// Company display name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Company type selecting the default chart of accounts.
    #[serde(default = "default_company_type")]
    pub company_type: CompanyType,
    /// Free-text reporting period label.
    #[serde(default = "default_period")]
    pub period: String,
    /// Optional logo image bytes, opaque to the pipeline.
    #[serde(default)]
    pub logo: Option<Vec<u8>>,
}

fn default_name() -> String {
    "Company Name".to_string()
}

fn default_company_type() -> CompanyType {
    CompanyType::Service
}

fn default_period() -> String {
    "For the year ended 31/12/2024".to_string()
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            company_type: default_company_type(),
            period: default_period(),
            logo: None,
        }
    }
}

/// The two derived statements from one recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Derived income statement.
    pub income_statement: IncomeStatement,
    /// Derived balance sheet, with net income already carried over.
    pub balance_sheet: BalanceSheet,
}
