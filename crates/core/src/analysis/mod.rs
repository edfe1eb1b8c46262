//! Financial ratio analysis.

pub mod service;
pub mod types;

pub use service::AnalysisService;
pub use types::FinancialRatios;
