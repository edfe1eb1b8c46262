//! Analysis result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline ratios derived from the two statements.
///
/// Ratios are fractions (0.25 = 25%); rendering as percentages is the
/// display layer's concern. A `None` means the ratio is undefined for the
/// current data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRatios {
    /// Gross profit over revenues; `None` without revenue.
    pub gross_margin: Option<Decimal>,
    /// Net income over revenues; `None` without revenue.
    pub net_margin: Option<Decimal>,
    /// Liabilities over assets; `None` without liabilities.
    pub debt_to_assets: Option<Decimal>,
}
