use chrono::Local;
use rust_decimal::Decimal;

/// Calendar date format used everywhere an expense date is stored or entered.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    pub date: String,
    pub description: String,
}

/// Input-form state for a new expense. Same shape as [`Expense`] minus the
/// identifier; the amount stays raw text until the store validates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            amount: String::new(),
            category: String::new(),
            date: Local::now().format(DATE_FORMAT).to_string(),
            description: String::new(),
        }
    }
}

impl ExpenseDraft {
    pub fn is_blank(&self) -> bool {
        self.amount.is_empty() && self.category.is_empty() && self.description.is_empty()
    }
}
