#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use super::app::{App, InputMode, Screen};
use super::commands::handle_command;
use crate::insights::DemoGateway;
use crate::store::ExpenseStore;
use crate::{sample, summary};

fn app() -> App {
    let mut store = ExpenseStore::new(sample::categories());
    store.seed(sample::demo_expenses());
    App::new(
        store,
        sample::monthly_trend(),
        Arc::new(DemoGateway::new(Duration::ZERO)),
    )
}

#[test]
fn test_add_command_with_args() {
    let mut app = app();
    handle_command("add 2023-04-16 food 12.50 Lunch out", &mut app).unwrap();

    let newest = &app.store.expenses()[0];
    assert_eq!(newest.category, "Food");
    assert_eq!(newest.description, "Lunch out");
    assert_eq!(app.screen, Screen::Expenses);
    assert_eq!(app.store.len(), 6);
}

#[test]
fn test_add_command_invalid_amount_reports() {
    let mut app = app();
    handle_command("add 2023-04-16 Food twelve", &mut app).unwrap();
    assert_eq!(app.store.len(), 5);
    assert!(app.status_message.starts_with("Invalid expense"));
}

#[test]
fn test_add_command_without_args_opens_form() {
    let mut app = app();
    handle_command("add", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.screen, Screen::Expenses);
}

#[test]
fn test_search_command_filters_expenses() {
    let mut app = app();
    handle_command("search gas", &mut app).unwrap();
    assert_eq!(app.visible.len(), 1);

    handle_command("clear", &mut app).unwrap();
    assert_eq!(app.visible.len(), 5);
}

#[test]
fn test_unknown_command_suggests_closest() {
    let mut app = app();
    handle_command("expnses", &mut app).unwrap();
    assert!(app.status_message.contains("expenses"));
}

#[test]
fn test_fetch_command_enters_loading() {
    let mut app = app();
    handle_command("fetch", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Insights);
    assert_eq!(app.insights.state, crate::insights::FetchState::Loading);
}

#[test]
fn test_dashboard_totals_refresh_after_add() {
    let mut app = app();
    let before = app.total_spent;
    handle_command("add 2023-04-16 Travel 100.00", &mut app).unwrap();
    assert_eq!(
        app.total_spent,
        (before + rust_decimal::Decimal::from(100)).round_dp(2)
    );
    assert_eq!(
        summary::top_category(app.store.expenses()).unwrap().0,
        "Housing"
    );
}
