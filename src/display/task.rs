//! Money task display formatting

use std::collections::HashMap;

use crate::models::{BankAccountId, MoneyTask};

/// Format a list of money tasks as a table
///
/// `account_names` resolves account IDs to display names.
pub fn format_task_list(
    tasks: &[MoneyTask],
    account_names: &HashMap<BankAccountId, String>,
) -> String {
    if tasks.is_empty() {
        return "No money tasks found.\n".to_string();
    }

    let title_width = tasks
        .iter()
        .map(|t| t.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<title_width$}  {:>10}  {:<12}  {:<11}  {:<8}  {:<10}  {}\n",
        "Title",
        "Amount",
        "Category",
        "Status",
        "Priority",
        "Due",
        "Account",
        title_width = title_width,
    ));

    output.push_str(&format!(
        "{:-<title_width$}  {:->10}  {:-<12}  {:-<11}  {:-<8}  {:-<10}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for task in tasks {
        let account = account_names
            .get(&task.account_id)
            .map(String::as_str)
            .unwrap_or("?");

        output.push_str(&format!(
            "{:<title_width$}  {:>10}  {:<12}  {:<11}  {:<8}  {:<10}  {}\n",
            task.title,
            task.amount.to_string(),
            task.category.as_str(),
            task.status.to_string(),
            task.priority.to_string(),
            task.due_date.format("%Y-%m-%d").to_string(),
            account,
            title_width = title_width,
        ));
    }

    output
}

/// Format a single task's details
pub fn format_task_details(task: &MoneyTask, account_name: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Task: {}\n", task.title));
    output.push_str(&format!("  ID:          {}\n", task.id));
    output.push_str(&format!("  Account:     {}\n", account_name));
    output.push_str(&format!("  Amount:      {}\n", task.amount));
    output.push_str(&format!("  Category:    {}\n", task.category));
    output.push_str(&format!("  Status:      {}\n", task.status));
    output.push_str(&format!("  Priority:    {}\n", task.priority));
    output.push_str(&format!("  Due:         {}\n", task.due_date.format("%Y-%m-%d")));

    if !task.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", task.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn test_task(account_id: BankAccountId) -> MoneyTask {
        MoneyTask::new(
            account_id,
            "Rent",
            Money::from_cents(120000),
            Category::new("housing"),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_task_list(&[], &HashMap::new()),
            "No money tasks found.\n"
        );
    }

    #[test]
    fn test_list_resolves_account_names() {
        let account_id = BankAccountId::new();
        let mut names = HashMap::new();
        names.insert(account_id, "Checking".to_string());

        let output = format_task_list(&[test_task(account_id)], &names);
        assert!(output.contains("Rent"));
        assert!(output.contains("$1200.00"));
        assert!(output.contains("Checking"));
    }

    #[test]
    fn test_unknown_account_renders_placeholder() {
        let output = format_task_list(&[test_task(BankAccountId::new())], &HashMap::new());
        assert!(output.contains("?"));
    }

    #[test]
    fn test_details() {
        let task = test_task(BankAccountId::new());
        let output = format_task_details(&task, "Checking");
        assert!(output.contains("Task: Rent"));
        assert!(output.contains("Account:     Checking"));
        assert!(output.contains("Status:      Pending"));
    }
}
