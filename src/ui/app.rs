use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::insights::{spawn_fetch, FetchOutcome, InsightsGateway, InsightsPanel};
use crate::store::ExpenseStore;
use crate::summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Expenses,
    Insights,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Expenses, Self::Insights]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Insights => write!(f, "Insights"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Form => write!(f, "ADD"),
        }
    }
}

/// Add-expense form fields in navigation order.
pub(crate) const FORM_FIELDS: [&str; 4] = ["Amount", "Category", "Date", "Description"];

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) tick: usize,

    // Expense list
    pub(crate) store: ExpenseStore,
    pub(crate) visible: Vec<usize>,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Dashboard aggregates (recomputed whenever expenses change)
    pub(crate) spending_by_category: Vec<(String, Decimal)>,
    pub(crate) total_spent: Decimal,
    pub(crate) monthly_trend: Vec<(String, u64)>,

    // Add-expense form
    pub(crate) form_field: usize,

    // Insights
    pub(crate) insights: InsightsPanel,
    gateway: Arc<dyn InsightsGateway>,
    fetch_tx: Sender<FetchOutcome>,
    fetch_rx: Receiver<FetchOutcome>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(
        store: ExpenseStore,
        monthly_trend: Vec<(String, u64)>,
        gateway: Arc<dyn InsightsGateway>,
    ) -> Self {
        let (fetch_tx, fetch_rx) = channel();
        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            tick: 0,

            store,
            visible: Vec::new(),
            expense_index: 0,
            expense_scroll: 0,

            spending_by_category: Vec::new(),
            total_spent: Decimal::ZERO,
            monthly_trend,

            form_field: 0,

            insights: InsightsPanel::new(),
            gateway,
            fetch_tx,
            fetch_rx,

            visible_rows: 20,
        };
        app.refresh_dashboard();
        app.refresh_expenses();
        app
    }

    pub(crate) fn refresh_dashboard(&mut self) {
        self.spending_by_category = summary::spending_by_category(self.store.expenses());
        self.total_spent = summary::total_spent(self.store.expenses());
    }

    /// Recompute which expenses the list shows under the current search
    /// filter, keeping cursor and scroll in range.
    pub(crate) fn refresh_expenses(&mut self) {
        let needle = self.search_input.to_lowercase();
        self.visible = self
            .store
            .expenses()
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                needle.is_empty()
                    || e.description.to_lowercase().contains(&needle)
                    || e.category.to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect();
        if self.expense_index >= self.visible.len() {
            self.expense_index = self.visible.len().saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    /// Kick off an insights fetch on a worker thread unless one is already
    /// in flight.
    pub(crate) fn start_fetch(&mut self) {
        if self.insights.begin_fetch() {
            spawn_fetch(Arc::clone(&self.gateway), self.fetch_tx.clone());
            self.set_status("Analyzing your expenses…");
        } else {
            self.set_status("Insights fetch already running");
        }
    }

    /// Apply any fetch outcomes the worker threads have posted since the
    /// last pass through the event loop.
    pub(crate) fn drain_fetch_outcomes(&mut self) {
        while let Ok(outcome) = self.fetch_rx.try_recv() {
            let failed = outcome.is_err();
            self.insights.apply(outcome);
            if failed {
                self.set_status("Could not fetch AI insights. Please try again later.");
            } else {
                self.set_status(format!(
                    "Insights updated: {} tips, {} recommendations",
                    self.insights.saving_tips.len(),
                    self.insights.budget_recommendations.len()
                ));
            }
        }
    }

    pub(crate) fn open_form(&mut self) {
        self.screen = Screen::Expenses;
        self.input_mode = InputMode::Form;
        self.form_field = 0;
    }

    pub(crate) fn cancel_form(&mut self) {
        self.input_mode = InputMode::Normal;
        if self.store.draft.is_blank() {
            self.set_status("Add cancelled");
        } else {
            self.set_status("Add cancelled (draft kept)");
        }
    }

    pub(crate) fn submit_form(&mut self) {
        match self.store.commit_draft() {
            Ok(expense) => {
                self.input_mode = InputMode::Normal;
                self.expense_index = 0;
                self.expense_scroll = 0;
                self.refresh_expenses();
                self.refresh_dashboard();
                self.set_status(format!(
                    "Added {} {}",
                    expense.category,
                    super::util::format_amount(expense.amount)
                ));
            }
            Err(err) => {
                // Stay in the form with the draft intact so it can be fixed.
                self.set_status(format!("Invalid expense: {err}"));
            }
        }
    }

    /// Step the draft's category through the fixed set. An empty category
    /// starts at the first entry going forward, the last going backward.
    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let categories = self.store.categories();
        if categories.is_empty() {
            return;
        }
        let current = categories
            .iter()
            .position(|c| *c == self.store.draft.category);
        let next = match (current, delta > 0) {
            (Some(i), true) => (i + 1) % categories.len(),
            (Some(i), false) => i.checked_sub(1).unwrap_or(categories.len() - 1),
            (None, true) => 0,
            (None, false) => categories.len() - 1,
        };
        let picked = categories[next].clone();
        self.store.draft.category = picked;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
