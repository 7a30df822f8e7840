//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::PaceResult;
use crate::models::{Expense, UserId};
use crate::storage::Storage;

use super::{parse_amount, resolve_now};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category name (defaults to "Other")
        #[arg(short, long)]
        category: Option<String>,
        /// Date or datetime of the expense (defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recent expenses
    #[command(alias = "ls")]
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    user: &UserId,
    cmd: ExpenseCommands,
) -> PaceResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = resolve_now(date.as_deref())?;
            let expense = storage.add_expense(Expense::new(
                user.clone(),
                amount,
                description,
                category.as_deref(),
                date,
            ))?;

            println!(
                "Recorded {} in '{}' on {}",
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.category,
                expense.date.format(&settings.date_format)
            );
        }

        ExpenseCommands::List { category, limit } => {
            let mut expenses = storage.expenses.get_recent(user, usize::MAX)?;
            if let Some(category) = category.as_deref() {
                expenses.retain(|e| e.matches_category(category));
            }
            expenses.truncate(limit);

            println!(
                "{}",
                format_expense_list(&expenses, &settings.date_format, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
