use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::models::{BudgetRecommendation, Insights, SavingTip};
use crate::sample;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum GatewayError {
    #[error("Insights service unavailable: {0}")]
    Unavailable(String),
    #[error("Insights service returned malformed data: {0}")]
    Malformed(String),
}

pub(crate) type FetchOutcome = Result<Insights, GatewayError>;

/// Boundary to the advisory backend. The real implementation would proxy an
/// inference service over the network; the one that ships returns canned
/// demo data. Fetches block the calling thread, so the TUI runs them
/// through [`spawn_fetch`].
pub(crate) trait InsightsGateway: Send + Sync {
    fn fetch_insights(&self) -> FetchOutcome;
}

/// Stub gateway: fixed payload after a simulated round-trip delay.
pub(crate) struct DemoGateway {
    latency: Duration,
}

impl DemoGateway {
    pub(crate) fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for DemoGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl InsightsGateway for DemoGateway {
    fn fetch_insights(&self) -> FetchOutcome {
        thread::sleep(self.latency);
        Ok(sample::demo_insights())
    }
}

/// Run one fetch on a worker thread, posting the outcome back over `tx`.
/// The receiver side is drained by the event loop; if the app quits first
/// the send fails and the result is discarded.
pub(crate) fn spawn_fetch(gateway: Arc<dyn InsightsGateway>, tx: Sender<FetchOutcome>) {
    thread::spawn(move || {
        let _ = tx.send(gateway.fetch_insights());
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchState {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Display state for the insights panel. The cycle is restartable
/// indefinitely: Idle → Loading → Loaded or Error, and either of those back
/// to Loading on the next trigger.
#[derive(Debug)]
pub(crate) struct InsightsPanel {
    pub(crate) state: FetchState,
    pub(crate) saving_tips: Vec<SavingTip>,
    pub(crate) budget_recommendations: Vec<BudgetRecommendation>,
    pub(crate) error: Option<String>,
}

impl InsightsPanel {
    pub(crate) fn new() -> Self {
        Self {
            state: FetchState::Idle,
            saving_tips: Vec::new(),
            budget_recommendations: Vec::new(),
            error: None,
        }
    }

    /// Enter Loading unless a fetch is already in flight. Returns whether
    /// the caller should actually start one; the panel itself never
    /// deduplicates beyond this.
    pub(crate) fn begin_fetch(&mut self) -> bool {
        if self.state == FetchState::Loading {
            return false;
        }
        self.state = FetchState::Loading;
        self.error = None;
        true
    }

    /// Apply a resolved or rejected fetch. Success replaces the displayed
    /// payload wholesale; failure records the message and keeps whatever
    /// was displayed before.
    pub(crate) fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(insights) => {
                self.saving_tips = insights.saving_tips;
                self.budget_recommendations = insights.budget_recommendations;
                self.error = None;
                self.state = FetchState::Loaded;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.state = FetchState::Error;
            }
        }
    }

    pub(crate) fn has_results(&self) -> bool {
        !self.saving_tips.is_empty() || !self.budget_recommendations.is_empty()
    }
}

#[cfg(test)]
mod tests;
