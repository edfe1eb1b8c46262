//! Workbook session tests.

use rust_decimal_macros::dec;

use crate::chart::{AccountCategory, AccountRecord, CompanyType};
use crate::statements::TrialBalanceEntry;

use super::error::WorkbookError;
use super::service::Workbook;
use super::types::CompanySettings;

fn settings(company_type: CompanyType) -> CompanySettings {
    CompanySettings {
        company_type,
        ..CompanySettings::default()
    }
}

#[test]
fn new_workbook_seeds_default_chart() {
    let workbook = Workbook::default();
    assert_eq!(workbook.settings().company_type, CompanyType::Service);
    assert_eq!(workbook.chart_of_accounts().len(), 9);
    assert!(workbook.trial_balance().is_empty());
}

#[test]
fn saving_settings_without_type_change_keeps_chart_edits() {
    let mut workbook = Workbook::default();
    workbook.set_chart_of_accounts(vec![AccountRecord::new(
        "1001",
        "Petty Cash",
        AccountCategory::Asset,
    )]);

    let mut updated = settings(CompanyType::Service);
    updated.name = "Acme Consulting".to_string();
    let replaced = workbook.update_settings(updated);

    assert!(!replaced);
    assert_eq!(workbook.settings().name, "Acme Consulting");
    assert_eq!(workbook.chart_of_accounts().len(), 1);
    assert_eq!(workbook.chart_of_accounts()[0].name, "Petty Cash");
}

#[test]
fn company_type_change_replaces_chart_and_discards_edits() {
    let mut workbook = Workbook::default();
    workbook.set_chart_of_accounts(vec![AccountRecord::new(
        "1001",
        "Petty Cash",
        AccountCategory::Asset,
    )]);

    let replaced = workbook.update_settings(settings(CompanyType::Trading));

    assert!(replaced);
    assert_eq!(workbook.chart_of_accounts().len(), 12);
    assert!(!workbook.chart_of_accounts().iter().any(|a| a.name == "Petty Cash"));
}

#[test]
fn statements_require_trial_balance_rows() {
    let workbook = Workbook::default();
    assert!(matches!(
        workbook.statements(),
        Err(WorkbookError::EmptyTrialBalance)
    ));
    assert!(matches!(
        workbook.ratios(),
        Err(WorkbookError::EmptyTrialBalance)
    ));
}

#[test]
fn full_pipeline_through_the_session() {
    let mut workbook = Workbook::default();
    workbook.set_trial_balance(vec![
        TrialBalanceEntry::new("Cash", None, "1300", ""),
        TrialBalanceEntry::new("Owner Capital", None, "", "1000"),
        TrialBalanceEntry::new("Service Revenue", None, "", "500"),
        TrialBalanceEntry::new("Rent Expense", None, "200", ""),
    ]);

    let totals = workbook.totals();
    assert_eq!(totals.total_debit, dec!(1500));
    assert_eq!(totals.total_credit, dec!(1500));
    assert!(totals.is_balanced);

    let statements = workbook.statements().unwrap();
    assert_eq!(statements.income_statement.net_income, dec!(300));
    assert_eq!(statements.balance_sheet.assets, dec!(1300));
    assert_eq!(statements.balance_sheet.ending_equity, dec!(1300));
    assert!(statements.balance_sheet.is_balanced);

    let ratios = workbook.ratios().unwrap();
    assert_eq!(ratios.gross_margin, Some(dec!(1)));
    assert_eq!(ratios.net_margin, Some(dec!(0.6)));
    assert_eq!(ratios.debt_to_assets, None);
}

#[test]
fn statements_are_stable_across_calls() {
    let mut workbook = Workbook::default();
    workbook.set_trial_balance(vec![
        TrialBalanceEntry::new("Cash", None, "1000", ""),
        TrialBalanceEntry::new("Owner Capital", None, "", "1000"),
    ]);

    let first = workbook.statements().unwrap();
    let second = workbook.statements().unwrap();
    assert_eq!(first, second);
}

#[test]
fn session_snapshot_round_trips_through_serde() {
    let mut workbook = Workbook::default();
    workbook.set_trial_balance(vec![TrialBalanceEntry::new(
        "Cash",
        Some(AccountCategory::Asset),
        "10",
        "",
    )]);

    let snapshot = serde_json::to_string(&workbook).unwrap();
    let restored: Workbook = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(restored, workbook);
}
