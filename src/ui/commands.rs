use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::ExpenseDraft;

use super::app::{App, Screen};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendWise", cmd_quit, r);
    register_command!("quit", "Quit SpendWise", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("i", "Go to Insights", cmd_insights, r);
    register_command!("insights", "Go to Insights", cmd_insights, r);
    register_command!(
        "add",
        "Add expense (e.g. :add 2023-04-16 Food 12.50 Lunch), no args opens the form",
        cmd_add,
        r
    );
    register_command!("a", "Add expense (form)", cmd_add, r);
    register_command!("fetch", "Fetch AI insights", cmd_fetch, r);
    register_command!("f", "Fetch AI insights", cmd_fetch, r);
    register_command!(
        "search",
        "Filter expenses (e.g. :search grocery)",
        cmd_search,
        r
    );
    register_command!("s", "Filter expenses (e.g. :s grocery)", cmd_search, r);
    register_command!("clear", "Clear search filter and status", cmd_clear, r);
    register_command!("categories", "List the expense categories", cmd_categories, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard();
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    app.refresh_expenses();
    Ok(())
}

fn cmd_insights(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Insights;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_form();
        return Ok(());
    }

    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() < 3 {
        app.set_status("Usage: :add <date> <category> <amount> [description]");
        return Ok(());
    }
    let draft = ExpenseDraft {
        date: parts[0].to_string(),
        category: parts[1].to_string(),
        amount: parts[2].to_string(),
        description: parts[3..].join(" "),
    };

    match app.store.add(&draft) {
        Ok(expense) => {
            app.expense_index = 0;
            app.expense_scroll = 0;
            app.refresh_expenses();
            app.refresh_dashboard();
            app.screen = Screen::Expenses;
            app.set_status(format!(
                "Added {} {}",
                expense.category,
                super::util::format_amount(expense.amount)
            ));
        }
        Err(err) => app.set_status(format!("Invalid expense: {err}")),
    }
    Ok(())
}

fn cmd_fetch(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Insights;
    app.start_fetch();
    Ok(())
}

fn cmd_search(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Expenses;
    app.expense_index = 0;
    app.expense_scroll = 0;
    app.refresh_expenses();
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.search_input.clear();
    app.status_message.clear();
    app.refresh_expenses();
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let list = app.store.categories().join(", ");
    app.set_status(format!("Categories: {list}"));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
