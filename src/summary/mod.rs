use rust_decimal::Decimal;

use crate::models::Expense;

/// Sum expense amounts per category in a single pass. Pairs come out in the
/// order each category first appears in the input; categories with no
/// expenses are simply absent. Totals are rounded to two decimals.
pub(crate) fn spending_by_category(expenses: &[Expense]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(name, _)| *name == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }
    for (_, total) in &mut totals {
        *total = total.round_dp(2);
    }
    totals
}

pub(crate) fn total_spent(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .fold(Decimal::ZERO, |acc, e| acc + e.amount)
        .round_dp(2)
}

/// The category with the largest total, with that total.
pub(crate) fn top_category(expenses: &[Expense]) -> Option<(String, Decimal)> {
    spending_by_category(expenses)
        .into_iter()
        .max_by_key(|(_, total)| *total)
}

/// Average amount per expense, zero for an empty list.
pub(crate) fn average_expense(expenses: &[Expense]) -> Decimal {
    if expenses.is_empty() {
        return Decimal::ZERO;
    }
    (total_spent(expenses) / Decimal::from(expenses.len())).round_dp(2)
}

/// The first `n` expenses of a most-recent-first list.
pub(crate) fn recent(expenses: &[Expense], n: usize) -> &[Expense] {
    &expenses[..n.min(expenses.len())]
}

#[cfg(test)]
mod tests;
