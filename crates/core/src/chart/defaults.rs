//! Default chart of accounts per company type.

use super::types::{AccountCategory, AccountRecord, CompanyType};

/// Returns the default chart of accounts for a company type.
///
/// Pure function of the selector. Callers replace (never merge) any existing
/// chart when the company type changes, so prior edits are lost.
#[must_use]
pub fn default_accounts(company_type: CompanyType) -> Vec<AccountRecord> {
    match company_type {
        CompanyType::Trading => vec![
            AccountRecord::new("1001", "Cash", AccountCategory::Asset),
            AccountRecord::new("1101", "Accounts Receivable", AccountCategory::Asset),
            AccountRecord::new("1201", "Inventory", AccountCategory::Asset),
            AccountRecord::new("2001", "Accounts Payable", AccountCategory::Liability),
            AccountRecord::new("3001", "Owner Capital", AccountCategory::Equity),
            AccountRecord::new("3101", "Owner Drawings", AccountCategory::Drawings),
            AccountRecord::new("4001", "Sales Revenue", AccountCategory::Revenue),
            // Contra revenue, kept in the Revenue bucket.
            AccountRecord::new("4101", "Sales Returns", AccountCategory::Revenue),
            AccountRecord::new("5001", "Cost of Goods Sold", AccountCategory::CostOfGoodsSold),
            AccountRecord::new("6001", "Salaries Expense", AccountCategory::Expense),
            AccountRecord::new("6002", "Rent Expense", AccountCategory::Expense),
            AccountRecord::new("6003", "Utilities Expense", AccountCategory::Expense),
        ],
        CompanyType::Service => vec![
            AccountRecord::new("1001", "Cash", AccountCategory::Asset),
            AccountRecord::new("1101", "Accounts Receivable", AccountCategory::Asset),
            AccountRecord::new("2001", "Accounts Payable", AccountCategory::Liability),
            AccountRecord::new("3001", "Owner Capital", AccountCategory::Equity),
            AccountRecord::new("3101", "Owner Drawings", AccountCategory::Drawings),
            AccountRecord::new("4001", "Service Revenue", AccountCategory::Revenue),
            AccountRecord::new("6001", "Salaries Expense", AccountCategory::Expense),
            AccountRecord::new("6002", "Rent Expense", AccountCategory::Expense),
            AccountRecord::new("6003", "Utilities Expense", AccountCategory::Expense),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_chart_has_nine_accounts() {
        let accounts = default_accounts(CompanyType::Service);
        assert_eq!(accounts.len(), 9);
        assert!(!accounts.iter().any(|a| a.name == "Inventory"));
        assert!(
            !accounts
                .iter()
                .any(|a| a.category == AccountCategory::CostOfGoodsSold)
        );
    }

    #[test]
    fn trading_chart_has_twelve_accounts() {
        let accounts = default_accounts(CompanyType::Trading);
        assert_eq!(accounts.len(), 12);
        assert!(accounts.iter().any(|a| a.name == "Inventory"));
        assert!(accounts.iter().any(|a| a.name == "Sales Returns"));
        assert!(
            accounts
                .iter()
                .any(|a| a.category == AccountCategory::CostOfGoodsSold)
        );
    }

    #[test]
    fn no_default_seeds_other_income_or_expense() {
        // Other Income / Other Expense stay reachable only via per-row
        // override.
        for company_type in [CompanyType::Service, CompanyType::Trading] {
            let accounts = default_accounts(company_type);
            assert!(!accounts.iter().any(|a| {
                matches!(
                    a.category,
                    AccountCategory::OtherIncome
                        | AccountCategory::OtherExpense
                        | AccountCategory::Unassigned
                )
            }));
        }
    }

    #[test]
    fn codes_and_names_are_unique() {
        for company_type in [CompanyType::Service, CompanyType::Trading] {
            let accounts = default_accounts(company_type);
            let codes: HashSet<_> = accounts.iter().map(|a| a.code.as_str()).collect();
            let names: HashSet<_> = accounts.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(codes.len(), accounts.len());
            assert_eq!(names.len(), accounts.len());
        }
    }
}
