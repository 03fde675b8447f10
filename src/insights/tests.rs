#![allow(clippy::unwrap_used)]

use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;

use super::*;
use crate::models::Insights;

fn tip(text: &str) -> SavingTip {
    SavingTip {
        tip: text.into(),
        category: "Food".into(),
        potential_saving: dec!(80),
    }
}

// ── panel state machine ───────────────────────────────────────

#[test]
fn test_starts_idle_and_empty() {
    let panel = InsightsPanel::new();
    assert_eq!(panel.state, FetchState::Idle);
    assert!(!panel.has_results());
    assert!(panel.error.is_none());
}

#[test]
fn test_trigger_enters_loading() {
    let mut panel = InsightsPanel::new();
    assert!(panel.begin_fetch());
    assert_eq!(panel.state, FetchState::Loading);
}

#[test]
fn test_second_trigger_while_loading_is_refused() {
    let mut panel = InsightsPanel::new();
    assert!(panel.begin_fetch());
    assert!(!panel.begin_fetch());
    assert_eq!(panel.state, FetchState::Loading);
}

#[test]
fn test_resolve_populates_and_clears_error() {
    let mut panel = InsightsPanel::new();
    panel.begin_fetch();
    panel.apply(Ok(crate::sample::demo_insights()));

    assert_eq!(panel.state, FetchState::Loaded);
    assert_eq!(panel.saving_tips.len(), 2);
    assert_eq!(panel.budget_recommendations.len(), 2);
    assert!(panel.error.is_none());
}

#[test]
fn test_resolve_with_zero_tips_is_loaded_not_error() {
    let mut panel = InsightsPanel::new();
    panel.begin_fetch();
    panel.apply(Ok(Insights::default()));

    assert_eq!(panel.state, FetchState::Loaded);
    assert!(panel.saving_tips.is_empty());
    assert!(panel.error.is_none());
}

#[test]
fn test_reject_on_first_attempt_keeps_empty_tips() {
    let mut panel = InsightsPanel::new();
    panel.begin_fetch();
    panel.apply(Err(GatewayError::Unavailable("connection refused".into())));

    assert_eq!(panel.state, FetchState::Error);
    assert!(panel.saving_tips.is_empty());
    assert_eq!(
        panel.error.as_deref(),
        Some("Insights service unavailable: connection refused")
    );
}

#[test]
fn test_reject_after_loaded_keeps_previous_tips() {
    let mut panel = InsightsPanel::new();
    panel.begin_fetch();
    panel.apply(Ok(Insights {
        budget_recommendations: Vec::new(),
        saving_tips: vec![tip("Meal prep")],
    }));

    panel.begin_fetch();
    panel.apply(Err(GatewayError::Malformed("truncated body".into())));

    assert_eq!(panel.state, FetchState::Error);
    assert!(panel.error.is_some());
    assert_eq!(panel.saving_tips.len(), 1);
    assert_eq!(panel.saving_tips[0].tip, "Meal prep");
}

#[test]
fn test_success_replaces_payload_wholesale() {
    let mut panel = InsightsPanel::new();
    panel.begin_fetch();
    panel.apply(Ok(Insights {
        budget_recommendations: Vec::new(),
        saving_tips: vec![tip("Old tip one"), tip("Old tip two")],
    }));

    panel.begin_fetch();
    panel.apply(Ok(Insights {
        budget_recommendations: Vec::new(),
        saving_tips: vec![tip("New tip")],
    }));

    assert_eq!(panel.saving_tips.len(), 1);
    assert_eq!(panel.saving_tips[0].tip, "New tip");
}

#[test]
fn test_cycle_is_restartable_after_error() {
    let mut panel = InsightsPanel::new();
    panel.begin_fetch();
    panel.apply(Err(GatewayError::Unavailable("timeout".into())));

    assert!(panel.begin_fetch());
    assert_eq!(panel.state, FetchState::Loading);
    assert!(panel.error.is_none());

    panel.apply(Ok(crate::sample::demo_insights()));
    assert_eq!(panel.state, FetchState::Loaded);
}

// ── gateways and the worker thread ────────────────────────────

#[test]
fn test_demo_gateway_returns_mock_payload() {
    let gateway = DemoGateway::new(Duration::ZERO);
    let insights = gateway.fetch_insights().unwrap();

    assert_eq!(insights.saving_tips.len(), 2);
    assert_eq!(insights.saving_tips[0].category, "Food");
    assert_eq!(insights.saving_tips[0].potential_saving, dec!(80));
    assert_eq!(insights.budget_recommendations[0].recommended_amount, dec!(400));
}

struct FailingGateway;

impl InsightsGateway for FailingGateway {
    fn fetch_insights(&self) -> FetchOutcome {
        Err(GatewayError::Unavailable("no route to host".into()))
    }
}

#[test]
fn test_spawn_fetch_delivers_over_channel() {
    let (tx, rx) = channel();
    spawn_fetch(Arc::new(DemoGateway::new(Duration::ZERO)), tx);

    let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(outcome.is_ok());
}

#[test]
fn test_spawn_fetch_delivers_errors() {
    let (tx, rx) = channel();
    spawn_fetch(Arc::new(FailingGateway), tx);

    let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(
        outcome.unwrap_err(),
        GatewayError::Unavailable("no route to host".into())
    );
}

#[test]
fn test_dropped_receiver_discards_result() {
    let (tx, rx) = channel();
    drop(rx);
    // The worker's send fails silently; nothing to observe beyond "no panic".
    spawn_fetch(Arc::new(DemoGateway::new(Duration::ZERO)), tx);
    std::thread::sleep(Duration::from_millis(50));
}
