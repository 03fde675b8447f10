mod insights;
mod models;
mod run;
mod sample;
mod store;
mod summary;
mod ui;

use std::sync::Arc;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Session data is demo data: the store starts from the same seed every
    // launch and nothing is persisted.
    let mut store = store::ExpenseStore::new(sample::categories());
    store.seed(sample::demo_expenses());
    let gateway = insights::DemoGateway::default();

    match args.len() {
        1 => {
            let app = ui::app::App::new(store, sample::monthly_trend(), Arc::new(gateway));
            run::as_tui(app)
        }
        _ => run::as_cli(&args, &mut store, &gateway),
    }
}
