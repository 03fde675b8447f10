mod expense;
mod insight;

pub use expense::{Expense, ExpenseDraft, DATE_FORMAT};
pub use insight::{BudgetRecommendation, Insights, SavingTip};

#[cfg(test)]
mod tests;
