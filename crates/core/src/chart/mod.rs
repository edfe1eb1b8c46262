//! Chart of accounts and category classification.
//!
//! This module defines the account category vocabulary, the normal-balance
//! rules used to sign balances, and the default chart seeded per company
//! type.

pub mod defaults;
pub mod types;

pub use defaults::default_accounts;
pub use types::{AccountCategory, AccountRecord, CompanyType, NormalBalance, StatementKind};
