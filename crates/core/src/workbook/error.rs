//! Workbook error types.

use thiserror::Error;

/// Workbook-related errors.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// Statements were requested before any trial-balance rows exist.
    #[error("Trial balance is empty, enter data first")]
    EmptyTrialBalance,
}
