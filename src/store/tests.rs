#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::sample;

fn store() -> ExpenseStore {
    ExpenseStore::new(sample::categories())
}

fn draft(amount: &str, category: &str) -> ExpenseDraft {
    ExpenseDraft {
        amount: amount.into(),
        category: category.into(),
        date: "2023-04-16".into(),
        description: "Lunch".into(),
    }
}

// ── add: valid drafts ─────────────────────────────────────────

#[test]
fn test_add_valid_draft() {
    let mut store = store();
    let added = store.add(&draft("12.50", "Food")).unwrap();

    assert_eq!(added.amount, dec!(12.50));
    assert_eq!(added.category, "Food");
    assert_eq!(added.date, "2023-04-16");
    assert_eq!(added.description, "Lunch");
    assert_eq!(store.expenses()[0], added);
}

#[test]
fn test_add_prepends_most_recent_first() {
    let mut store = store();
    store.seed(sample::demo_expenses());
    let before = store.len();

    let added = store.add(&draft("9.99", "Shopping")).unwrap();
    assert_eq!(store.len(), before + 1);
    assert_eq!(store.expenses()[0].id, added.id);
}

#[test]
fn test_add_assigns_increasing_unique_ids() {
    let mut store = store();
    let a = store.add(&draft("1.00", "Food")).unwrap();
    let b = store.add(&draft("2.00", "Travel")).unwrap();
    assert!(b.id > a.id);
}

#[test]
fn test_seed_continues_ids_above_seeded() {
    let mut store = store();
    store.seed(sample::demo_expenses());
    let added = store.add(&draft("3.00", "Other")).unwrap();
    assert_eq!(added.id, 6);
}

#[test]
fn test_add_zero_amount_is_valid() {
    let mut store = store();
    let added = store.add(&draft("0", "Food")).unwrap();
    assert_eq!(added.amount, Decimal::ZERO);
}

#[test]
fn test_add_canonicalizes_category_case() {
    let mut store = store();
    let added = store.add(&draft("5.00", "food")).unwrap();
    assert_eq!(added.category, "Food");
}

#[test]
fn test_add_rounds_amount_to_two_decimals() {
    let mut store = store();
    let added = store.add(&draft("1.005", "Food")).unwrap();
    assert_eq!(added.amount.scale(), 2);
}

// ── add: rejected drafts never mutate state ───────────────────

#[test]
fn test_add_rejects_empty_amount() {
    let mut store = store();
    store.seed(sample::demo_expenses());
    let before = store.expenses().to_vec();

    let err = store.add(&draft("", "Food")).unwrap_err();
    assert_eq!(err, ValidationError::MissingAmount);
    assert_eq!(store.expenses(), before.as_slice());
}

#[test]
fn test_add_rejects_non_numeric_amount() {
    let mut store = store();
    let err = store.add(&draft("abc", "Food")).unwrap_err();
    assert_eq!(err, ValidationError::InvalidAmount("abc".into()));
    assert_eq!(store.len(), 0);
}

#[test]
fn test_add_rejects_negative_amount() {
    let mut store = store();
    let err = store.add(&draft("-5.00", "Food")).unwrap_err();
    assert_eq!(err, ValidationError::NegativeAmount);
    assert_eq!(store.len(), 0);
}

#[test]
fn test_add_rejects_empty_category() {
    let mut store = store();
    let err = store.add(&draft("5.00", "")).unwrap_err();
    assert_eq!(err, ValidationError::MissingCategory);
    assert_eq!(store.len(), 0);
}

#[test]
fn test_add_rejects_unknown_category() {
    let mut store = store();
    let err = store.add(&draft("5.00", "Gambling")).unwrap_err();
    assert_eq!(err, ValidationError::UnknownCategory("Gambling".into()));
    assert_eq!(store.len(), 0);
}

#[test]
fn test_add_rejects_malformed_date() {
    let mut store = store();
    let mut d = draft("5.00", "Food");
    d.date = "04/16/2023".into();
    let err = store.add(&d).unwrap_err();
    assert_eq!(err, ValidationError::InvalidDate("04/16/2023".into()));
    assert_eq!(store.len(), 0);
}

#[test]
fn test_rejected_id_is_not_burned() {
    let mut store = store();
    let _ = store.add(&draft("bad", "Food"));
    let added = store.add(&draft("1.00", "Food")).unwrap();
    assert_eq!(added.id, 1);
}

// ── commit_draft ──────────────────────────────────────────────

#[test]
fn test_commit_draft_resets_to_defaults() {
    let mut store = store();
    store.draft = draft("7.25", "Travel");

    let added = store.commit_draft().unwrap();
    assert_eq!(added.amount, dec!(7.25));
    assert!(store.draft.is_blank());
    assert_eq!(
        store.draft.date,
        chrono::Local::now().format(crate::models::DATE_FORMAT).to_string()
    );
}

#[test]
fn test_failed_commit_keeps_draft() {
    let mut store = store();
    store.draft = draft("not-a-number", "Travel");

    assert!(store.commit_draft().is_err());
    assert_eq!(store.draft.amount, "not-a-number");
    assert_eq!(store.draft.category, "Travel");
    assert_eq!(store.len(), 0);
}
