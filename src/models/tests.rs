#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── ExpenseDraft ──────────────────────────────────────────────

#[test]
fn test_draft_defaults_to_today() {
    let draft = ExpenseDraft::default();
    let today = chrono::Local::now().format(DATE_FORMAT).to_string();
    assert_eq!(draft.date, today);
    assert!(draft.amount.is_empty());
    assert!(draft.category.is_empty());
    assert!(draft.description.is_empty());
}

#[test]
fn test_draft_is_blank() {
    assert!(ExpenseDraft::default().is_blank());

    let mut draft = ExpenseDraft::default();
    draft.amount = "10".into();
    assert!(!draft.is_blank());
}

// ── Insights ──────────────────────────────────────────────────

#[test]
fn test_insights_is_empty() {
    assert!(Insights::default().is_empty());

    let with_tip = Insights {
        budget_recommendations: Vec::new(),
        saving_tips: vec![SavingTip {
            tip: "Meal prep".into(),
            category: "Food".into(),
            potential_saving: dec!(80),
        }],
    };
    assert!(!with_tip.is_empty());

    let with_rec = Insights {
        budget_recommendations: vec![BudgetRecommendation {
            category: "Food".into(),
            recommended_amount: dec!(400),
            reasoning: "Average spending".into(),
        }],
        saving_tips: Vec::new(),
    };
    assert!(!with_rec.is_empty());
}
