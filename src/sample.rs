//! Demonstration data. Everything the app shows before the user touches it
//! comes from here and is injected at startup; nothing below is reachable
//! from display code directly.

use rust_decimal::Decimal;

use crate::models::{BudgetRecommendation, Expense, Insights, SavingTip};

/// The fixed category set an expense may belong to.
pub(crate) const EXPENSE_CATEGORIES: [&str; 10] = [
    "Food",
    "Transportation",
    "Housing",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Education",
    "Travel",
    "Other",
];

/// Six months of spending totals for the dashboard trend line.
pub(crate) const MONTHLY_TREND: [(&str, u64); 6] = [
    ("Jan", 2400),
    ("Feb", 1398),
    ("Mar", 2800),
    ("Apr", 3908),
    ("May", 4800),
    ("Jun", 3800),
];

pub(crate) fn categories() -> Vec<String> {
    EXPENSE_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

pub(crate) fn monthly_trend() -> Vec<(String, u64)> {
    MONTHLY_TREND
        .iter()
        .map(|(name, total)| (name.to_string(), *total))
        .collect()
}

/// Seed expenses, most recent first.
pub(crate) fn demo_expenses() -> Vec<Expense> {
    let raw: [(i64, i64, &str, &str, &str); 5] = [
        (1, 2550, "Food", "2023-04-15", "Grocery shopping"),
        (2, 4500, "Transportation", "2023-04-14", "Gas"),
        (3, 85000, "Housing", "2023-04-10", "Rent"),
        (4, 1599, "Entertainment", "2023-04-13", "Movie tickets"),
        (5, 12000, "Utilities", "2023-04-11", "Electricity bill"),
    ];
    raw.iter()
        .map(|(id, cents, category, date, description)| Expense {
            id: *id,
            amount: Decimal::new(*cents, 2),
            category: category.to_string(),
            date: date.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// The advisory payload the demo gateway hands back on every fetch.
pub(crate) fn demo_insights() -> Insights {
    Insights {
        budget_recommendations: vec![
            BudgetRecommendation {
                category: "Food".into(),
                recommended_amount: Decimal::from(400),
                reasoning: "Based on your household size and average spending patterns".into(),
            },
            BudgetRecommendation {
                category: "Entertainment".into(),
                recommended_amount: Decimal::from(150),
                reasoning: "Consider reducing slightly to meet savings goals".into(),
            },
        ],
        saving_tips: vec![
            SavingTip {
                tip: "Consider meal prepping to reduce food expenses".into(),
                category: "Food".into(),
                potential_saving: Decimal::from(80),
            },
            SavingTip {
                tip: "Your utility bills could be reduced with energy-efficient appliances".into(),
                category: "Utilities".into(),
                potential_saving: Decimal::from(45),
            },
        ],
    }
}
