use anyhow::Result;

use crate::insights::InsightsGateway;
use crate::models::ExpenseDraft;
use crate::store::ExpenseStore;
use crate::summary;

pub(crate) fn as_cli(
    args: &[String],
    store: &mut ExpenseStore,
    gateway: &dyn InsightsGateway,
) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(store),
        "list" | "ls" => cli_list(store),
        "add" => cli_add(&args[2..], store),
        "insights" => cli_insights(gateway),
        "categories" => cli_categories(store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendwise {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendWise — demo expense tracker");
    println!();
    println!("Usage: spendwise [command]");
    println!();
    println!("Commands:");
    println!("  (none)                             Launch interactive TUI");
    println!("  summary                            Spending totals by category");
    println!("  list                               List all expenses");
    println!("  add <date> <category> <amount> [description]");
    println!("                                     Add an expense (date: YYYY-MM-DD)");
    println!("  insights                           Fetch AI saving tips and budget advice");
    println!("  categories                         List the expense categories");
    println!("  --help, -h                         Show this help");
    println!("  --version, -V                      Show version");
}

fn cli_summary(store: &ExpenseStore) -> Result<()> {
    let expenses = store.expenses();
    let spending = summary::spending_by_category(expenses);

    println!("SpendWise — summary");
    println!("{}", "─".repeat(40));
    println!("  Total:      ${:.2}", summary::total_spent(expenses));
    println!("  Expenses:   {}", expenses.len());
    if let Some((name, total)) = summary::top_category(expenses) {
        println!("  Top:        {name} (${total:.2})");
    }

    if !spending.is_empty() {
        println!();
        println!("Spending by Category:");
        for (name, total) in &spending {
            println!("  {name:<20} ${total:.2}");
        }
    }

    Ok(())
}

fn cli_list(store: &ExpenseStore) -> Result<()> {
    let expenses = store.expenses();
    if expenses.is_empty() {
        println!("No expenses");
        return Ok(());
    }

    println!(
        "{:<4} {:<12} {:<16} {:<28} Amount",
        "ID", "Date", "Category", "Description"
    );
    println!("{}", "─".repeat(72));
    for expense in expenses {
        println!(
            "{:<4} {:<12} {:<16} {:<28} ${:.2}",
            expense.id, expense.date, expense.category, expense.description, expense.amount,
        );
    }
    Ok(())
}

fn cli_add(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: spendwise add <date> <category> <amount> [description]");
    }

    let draft = ExpenseDraft {
        date: args[0].clone(),
        category: args[1].clone(),
        amount: args[2].clone(),
        description: args[3..].join(" "),
    };

    let expense = store.add(&draft)?;
    println!(
        "Added #{}: {} {} ${:.2}",
        expense.id, expense.date, expense.category, expense.amount
    );
    Ok(())
}

fn cli_insights(gateway: &dyn InsightsGateway) -> Result<()> {
    println!("Analyzing your expenses…");
    let insights = gateway.fetch_insights()?;

    if insights.is_empty() {
        println!("No suggestions this time.");
        return Ok(());
    }

    if !insights.budget_recommendations.is_empty() {
        println!();
        println!("Budget Recommendations:");
        for rec in &insights.budget_recommendations {
            println!(
                "  {:<16} ${:.2}/month — {}",
                rec.category, rec.recommended_amount, rec.reasoning
            );
        }
    }

    if !insights.saving_tips.is_empty() {
        println!();
        println!("Saving Tips:");
        for tip in &insights.saving_tips {
            println!("  • {} ({}, save ~${:.2})", tip.tip, tip.category, tip.potential_saving);
        }
    }

    Ok(())
}

fn cli_categories(store: &ExpenseStore) -> Result<()> {
    for category in store.categories() {
        println!("{category}");
    }
    Ok(())
}
