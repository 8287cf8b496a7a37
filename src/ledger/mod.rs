//! Balance reconciliation engine
//!
//! Computes a bank account's current balance from its initial balance and
//! the full set of money tasks referencing it:
//!
//! ```text
//! current = initial + completed income - completed expenses
//! ```
//!
//! Only tasks with status `Completed` participate; the category tag
//! "income" marks inflows and every other category is an expense. The
//! computation is a pure function over a snapshot of the task set and is
//! idempotent, so callers re-run it in full after every mutation instead
//! of patching the stored balance incrementally. Incremental patching is
//! deliberately not offered: patch-on-transition schemes double-apply or
//! miss adjustments when a status flips more than once or edits overlap,
//! while two overlapping full recomputations converge to the same answer.

use crate::models::{Money, MoneyTask};

/// Breakdown of a balance recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceBreakdown {
    /// The account's initial balance
    pub initial_balance: Money,
    /// Sum of completed income task amounts
    pub completed_income: Money,
    /// Sum of completed non-income task amounts
    pub completed_expenses: Money,
    /// initial + income - expenses
    pub current_balance: Money,
}

/// Recompute an account's current balance from its full task set.
///
/// Tasks belonging to other accounts must not be passed in; the engine
/// sums everything it is given.
pub fn recompute_balance(initial_balance: Money, tasks: &[MoneyTask]) -> Money {
    breakdown(initial_balance, tasks).current_balance
}

/// Recompute with the income/expense sums exposed, for display and audit.
pub fn breakdown(initial_balance: Money, tasks: &[MoneyTask]) -> BalanceBreakdown {
    let mut completed_income = Money::zero();
    let mut completed_expenses = Money::zero();

    for task in tasks.iter().filter(|t| t.is_completed()) {
        if task.is_income() {
            completed_income += effective_amount(task.amount);
        } else {
            completed_expenses += effective_amount(task.amount);
        }
    }

    BalanceBreakdown {
        initial_balance,
        completed_income,
        completed_expenses,
        current_balance: initial_balance + completed_income - completed_expenses,
    }
}

/// Negative amounts contribute nothing to either sum. Amounts are already
/// integers by construction, so the malformed-number case cannot occur
/// past the parse boundary.
fn effective_amount(amount: Money) -> Money {
    if amount.is_negative() {
        Money::zero()
    } else {
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankAccountId, Category, MoneyTask, TaskStatus};
    use chrono::NaiveDate;

    fn task(
        account_id: BankAccountId,
        amount_cents: i64,
        category: &str,
        status: TaskStatus,
    ) -> MoneyTask {
        let mut t = MoneyTask::new(
            account_id,
            "task",
            Money::from_cents(amount_cents),
            Category::new(category),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        t.status = status;
        t
    }

    #[test]
    fn test_zero_tasks_baseline() {
        // No tasks: current == initial, for any initial
        for cents in [0, 1, -250, 100000] {
            let initial = Money::from_cents(cents);
            assert_eq!(recompute_balance(initial, &[]), initial);
        }
    }

    #[test]
    fn test_income_expense_symmetry() {
        let account_id = BankAccountId::new();
        let tasks = vec![
            task(account_id, 7500, "income", TaskStatus::Completed),
            task(account_id, 7500, "rent", TaskStatus::Completed),
        ];
        assert_eq!(recompute_balance(Money::zero(), &tasks), Money::zero());
    }

    #[test]
    fn test_pending_tasks_are_invisible() {
        let account_id = BankAccountId::new();
        let initial = Money::from_cents(50000);

        let mut tasks = vec![task(account_id, 20000, "rent", TaskStatus::Completed)];
        let with_completed_only = recompute_balance(initial, &tasks);

        tasks.push(task(account_id, 99999, "groceries", TaskStatus::Pending));
        tasks.push(task(account_id, 12345, "income", TaskStatus::InProgress));

        assert_eq!(recompute_balance(initial, &tasks), with_completed_only);
    }

    #[test]
    fn test_idempotence() {
        let account_id = BankAccountId::new();
        let initial = Money::from_cents(100000);
        let tasks = vec![
            task(account_id, 30000, "income", TaskStatus::Completed),
            task(account_id, 20000, "rent", TaskStatus::Completed),
            task(account_id, 50000, "travel", TaskStatus::Pending),
        ];

        let first = recompute_balance(initial, &tasks);
        let second = recompute_balance(initial, &tasks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_amount_coerced_to_zero() {
        let account_id = BankAccountId::new();
        let initial = Money::from_cents(1000);
        let tasks = vec![
            task(account_id, -5000, "rent", TaskStatus::Completed),
            task(account_id, -5000, "income", TaskStatus::Completed),
        ];
        assert_eq!(recompute_balance(initial, &tasks), initial);
    }

    #[test]
    fn test_all_non_income_categories_are_expenses() {
        let account_id = BankAccountId::new();
        let tasks = vec![
            task(account_id, 100, "rent", TaskStatus::Completed),
            task(account_id, 100, "fun", TaskStatus::Completed),
            task(account_id, 100, "anything-at-all", TaskStatus::Completed),
        ];
        assert_eq!(
            recompute_balance(Money::from_cents(1000), &tasks),
            Money::from_cents(700)
        );
    }

    #[test]
    fn test_scenario_a() {
        // initial 1000; completed expense 200, pending expense 500,
        // completed income 300 -> 1000 + 300 - 200 = 1100
        let account_id = BankAccountId::new();
        let tasks = vec![
            task(account_id, 20000, "bills", TaskStatus::Completed),
            task(account_id, 50000, "bills", TaskStatus::Pending),
            task(account_id, 30000, "income", TaskStatus::Completed),
        ];
        assert_eq!(
            recompute_balance(Money::from_cents(100000), &tasks),
            Money::from_cents(110000)
        );
    }

    #[test]
    fn test_scenario_b() {
        assert_eq!(recompute_balance(Money::zero(), &[]), Money::zero());
    }

    #[test]
    fn test_breakdown_sums() {
        let account_id = BankAccountId::new();
        let tasks = vec![
            task(account_id, 30000, "income", TaskStatus::Completed),
            task(account_id, 5000, "income", TaskStatus::Completed),
            task(account_id, 20000, "rent", TaskStatus::Completed),
        ];

        let b = breakdown(Money::from_cents(100000), &tasks);
        assert_eq!(b.completed_income, Money::from_cents(35000));
        assert_eq!(b.completed_expenses, Money::from_cents(20000));
        assert_eq!(b.current_balance, Money::from_cents(115000));
    }
}
