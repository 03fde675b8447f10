#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Expense;

fn expense(id: i64, amount: Decimal, category: &str) -> Expense {
    Expense {
        id,
        amount,
        category: category.into(),
        date: "2023-04-15".into(),
        description: String::new(),
    }
}

// ── spending_by_category ──────────────────────────────────────

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(spending_by_category(&[]).is_empty());
}

#[test]
fn test_distinct_categories() {
    let expenses = [
        expense(1, dec!(25.50), "Food"),
        expense(2, dec!(45.00), "Transportation"),
        expense(3, dec!(120.00), "Utilities"),
    ];
    assert_eq!(
        spending_by_category(&expenses),
        vec![
            ("Food".to_string(), dec!(25.50)),
            ("Transportation".to_string(), dec!(45.00)),
            ("Utilities".to_string(), dec!(120.00)),
        ]
    );
}

#[test]
fn test_repeated_category_accumulates() {
    let expenses = [
        expense(1, dec!(10.00), "Food"),
        expense(2, dec!(5.25), "Travel"),
        expense(3, dec!(2.75), "Food"),
    ];
    assert_eq!(
        spending_by_category(&expenses),
        vec![
            ("Food".to_string(), dec!(12.75)),
            ("Travel".to_string(), dec!(5.25)),
        ]
    );
}

#[test]
fn test_output_order_is_first_occurrence() {
    let expenses = [
        expense(1, dec!(1), "Travel"),
        expense(2, dec!(1), "Food"),
        expense(3, dec!(1), "Travel"),
    ];
    let names: Vec<String> = spending_by_category(&expenses)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["Travel".to_string(), "Food".to_string()]);
}

#[test]
fn test_permutation_changes_order_only() {
    let a = [
        expense(1, dec!(10.10), "Food"),
        expense(2, dec!(20.20), "Travel"),
        expense(3, dec!(30.30), "Food"),
        expense(4, dec!(40.40), "Other"),
    ];
    let b = [a[3].clone(), a[0].clone(), a[2].clone(), a[1].clone()];

    let mut totals_a = spending_by_category(&a);
    let mut totals_b = spending_by_category(&b);
    totals_a.sort();
    totals_b.sort();
    assert_eq!(totals_a, totals_b);
}

#[test]
fn test_totals_sum_equals_amount_sum() {
    let expenses = [
        expense(1, dec!(0.10), "Food"),
        expense(2, dec!(0.20), "Food"),
        expense(3, dec!(0.30), "Travel"),
        expense(4, dec!(99.99), "Other"),
    ];
    let total_of_totals: Decimal = spending_by_category(&expenses)
        .iter()
        .map(|(_, t)| *t)
        .sum();
    assert_eq!(total_of_totals, total_spent(&expenses));
}

#[test]
fn test_demo_expenses_aggregate() {
    let totals = spending_by_category(&crate::sample::demo_expenses());
    assert_eq!(totals.len(), 5);
    assert_eq!(total_spent(&crate::sample::demo_expenses()), dec!(1056.49));
}

// ── dashboard helpers ─────────────────────────────────────────

#[test]
fn test_total_spent_empty() {
    assert_eq!(total_spent(&[]), Decimal::ZERO);
}

#[test]
fn test_top_category() {
    let expenses = [
        expense(1, dec!(10), "Food"),
        expense(2, dec!(850), "Housing"),
        expense(3, dec!(20), "Food"),
    ];
    assert_eq!(top_category(&expenses), Some(("Housing".into(), dec!(850))));
    assert_eq!(top_category(&[]), None);
}

#[test]
fn test_average_expense() {
    let expenses = [expense(1, dec!(10), "Food"), expense(2, dec!(5), "Food")];
    assert_eq!(average_expense(&expenses), dec!(7.50));
    assert_eq!(average_expense(&[]), Decimal::ZERO);
}

#[test]
fn test_recent_clamps_to_len() {
    let expenses = [expense(1, dec!(1), "Food"), expense(2, dec!(2), "Food")];
    assert_eq!(recent(&expenses, 5).len(), 2);
    assert_eq!(recent(&expenses, 1)[0].id, 1);
    assert!(recent(&[], 5).is_empty());
}
