//! Trial balance x chart of accounts merge.

use std::collections::HashMap;

use tallybook_shared::LenientAmount;

use crate::chart::{AccountCategory, AccountRecord};

use super::types::{MergedRow, TrialBalanceEntry};

/// Joins trial-balance rows to chart categories and computes signed balances.
///
/// Left join on account name with the trial balance driving: every entry is
/// kept even without a chart match, chart rows without entries are dropped.
/// Duplicate chart names are deduplicated, last-defined record wins. Category
/// resolution priority: per-row override, else chart category, else
/// `Unassigned`. Debit/credit cells are coerced leniently; a bad cell is
/// repaired to zero and flagged, never failing the merge.
#[must_use]
pub fn merge(trial_balance: &[TrialBalanceEntry], chart: &[AccountRecord]) -> Vec<MergedRow> {
    // Insertion order makes the last duplicate win.
    let categories: HashMap<&str, AccountCategory> = chart
        .iter()
        .map(|account| (account.name.as_str(), account.category))
        .collect();

    trial_balance
        .iter()
        .map(|entry| {
            let category = entry
                .category_override
                .or_else(|| categories.get(entry.account_name.as_str()).copied())
                .unwrap_or(AccountCategory::Unassigned);

            let debit = LenientAmount::parse(&entry.debit);
            let credit = LenientAmount::parse(&entry.credit);
            let balance = category
                .normal_balance()
                .signed_balance(debit.value, credit.value);

            MergedRow {
                account_name: entry.account_name.clone(),
                category,
                debit: debit.value,
                debit_defaulted: debit.defaulted,
                credit: credit.value,
                credit_defaulted: credit.defaulted,
                balance,
            }
        })
        .collect()
}
