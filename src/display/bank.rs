//! Bank account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::Money;
use crate::services::bank::BankAccountSummary;

/// Format a list of accounts with balances as a table
pub fn format_account_list(summaries: &[BankAccountSummary]) -> String {
    if summaries.is_empty() {
        return "No bank accounts found.\n".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.account.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let bank_width = summaries
        .iter()
        .map(|s| s.account.bank_name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<bank_width$}  {:>12}  {:>12}  {}\n",
        "Name",
        "Bank",
        "Initial",
        "Current",
        "Tasks",
        name_width = name_width,
        bank_width = bank_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:-<bank_width$}  {:->12}  {:->12}  {:-<5}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        bank_width = bank_width,
    ));

    for summary in summaries {
        output.push_str(&format!(
            "{:<name_width$}  {:<bank_width$}  {:>12}  {:>12}  {}\n",
            summary.account.name,
            summary.account.bank_name,
            summary.account.initial_balance.to_string(),
            summary.breakdown.current_balance.to_string(),
            summary.task_count,
            name_width = name_width,
            bank_width = bank_width,
        ));
    }

    let total: Money = summaries
        .iter()
        .map(|s| s.breakdown.current_balance)
        .sum();

    output.push_str(&format!(
        "{:-<name_width$}  {:-<bank_width$}  {:->12}  {:->12}  {:-<5}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        bank_width = bank_width,
    ));

    output.push_str(&format!(
        "{:<name_width$}  {:<bank_width$}  {:>12}  {:>12}\n",
        "TOTAL",
        "",
        "",
        total.to_string(),
        name_width = name_width,
        bank_width = bank_width,
    ));

    output
}

/// Format a single account's details with its reconciliation breakdown
pub fn format_account_details(summary: &BankAccountSummary) -> String {
    let account = &summary.account;
    let breakdown = &summary.breakdown;

    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Bank:               {}\n", account.bank_name));
    output.push_str(&format!("  Account Number:     {}\n", account.account_number));
    output.push_str(&format!("  ID:                 {}\n", account.id));
    output.push_str(&format!("  Initial Balance:    {}\n", breakdown.initial_balance));
    output.push_str(&format!("  Completed Income:   {}\n", breakdown.completed_income));
    output.push_str(&format!("  Completed Expenses: {}\n", breakdown.completed_expenses));
    output.push_str(&format!("  Current Balance:    {}\n", breakdown.current_balance));
    output.push_str(&format!("  Tasks:              {}\n", summary.task_count));

    output
}
