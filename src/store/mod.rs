use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Expense, ExpenseDraft, DATE_FORMAT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Amount is required")]
    MissingAmount,
    #[error("Amount must be a number, got '{0}'")]
    InvalidAmount(String),
    #[error("Amount must not be negative")]
    NegativeAmount,
    #[error("Category is required")]
    MissingCategory,
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Date must be YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),
}

/// In-memory holder of the expense list and the pending add-expense draft.
/// Records are created through [`add`](ExpenseStore::add), never mutated or
/// deleted, and live until the process exits.
pub(crate) struct ExpenseStore {
    categories: Vec<String>,
    expenses: Vec<Expense>,
    pub(crate) draft: ExpenseDraft,
    next_id: i64,
}

impl ExpenseStore {
    pub(crate) fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            expenses: Vec::new(),
            draft: ExpenseDraft::default(),
            next_id: 1,
        }
    }

    /// Replace the expense list with pre-existing records (most recent
    /// first). Fresh ids continue above the highest seeded id.
    pub(crate) fn seed(&mut self, expenses: Vec<Expense>) {
        self.next_id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.expenses = expenses;
    }

    pub(crate) fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub(crate) fn categories(&self) -> &[String] {
        &self.categories
    }

    pub(crate) fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Validate a draft and, on success, prepend the completed record to the
    /// list and return a copy of it. A rejected draft leaves the store
    /// untouched.
    pub(crate) fn add(&mut self, draft: &ExpenseDraft) -> Result<Expense, ValidationError> {
        let amount = parse_amount(&draft.amount)?;
        let category = self.canonical_category(&draft.category)?;
        let date = parse_date(&draft.date)?;

        let expense = Expense {
            id: self.next_id,
            amount,
            category,
            date,
            description: draft.description.trim().to_string(),
        };
        self.next_id += 1;
        self.expenses.insert(0, expense.clone());
        Ok(expense)
    }

    /// Commit the owned draft. On success the draft resets to defaults
    /// (today's date, everything else empty); on failure it is kept as-is
    /// so the user can correct it.
    pub(crate) fn commit_draft(&mut self) -> Result<Expense, ValidationError> {
        let draft = self.draft.clone();
        let expense = self.add(&draft)?;
        self.draft = ExpenseDraft::default();
        Ok(expense)
    }

    /// Match a category against the fixed set, case-insensitively, returning
    /// the set's canonical spelling.
    fn canonical_category(&self, name: &str) -> Result<String, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        let lower = trimmed.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.to_lowercase() == lower)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownCategory(trimmed.to_string()))
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount);
    }
    Ok(amount.round_dp(2))
}

fn parse_date(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests;
