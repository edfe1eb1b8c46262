//! Export error types.

use thiserror::Error;

/// Errors that can occur while building the spreadsheet.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The underlying xlsx writer failed.
    #[error("Spreadsheet write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
