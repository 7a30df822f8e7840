//! Budget CLI commands
//!
//! Implements CLI commands for setting, listing and removing category budgets,
//! and for checking a single budget's pacing.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_limit, format_pacing};
use crate::error::PaceResult;
use crate::models::{Budget, PeriodKind, UserId};
use crate::services::SummaryService;
use crate::storage::Storage;

use super::{parse_amount, print_json, resolve_now};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a flat budget for a category (replaces any existing one)
    Set {
        /// Category name
        category: String,
        /// Amount for the whole period (e.g., "400" or "400.00")
        amount: String,
        /// Budget period: weekly or monthly
        #[arg(short, long)]
        period: Option<PeriodKind>,
    },

    /// Set separate per-day weekday and weekend budgets for a category
    Split {
        /// Category name
        category: String,
        /// Per-day amount for Monday to Friday
        weekday: String,
        /// Per-day amount for Saturday and Sunday
        weekend: String,
        /// Budget period: weekly or monthly
        #[arg(short, long)]
        period: Option<PeriodKind>,
    },

    /// List budgets
    #[command(alias = "ls")]
    List,

    /// Remove the budget for a category
    #[command(alias = "rm")]
    Remove {
        /// Category name
        category: String,
    },

    /// Show pacing for one category's budget
    Pacing {
        /// Category name
        category: String,
        /// Evaluate as of this date or datetime (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    user: &UserId,
    cmd: BudgetCommands,
) -> PaceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            period,
        } => {
            let amount = parse_amount(&amount)?;
            let period = period.unwrap_or(settings.default_period);
            let budget =
                storage.upsert_budget(Budget::flat(user.clone(), category, amount, period))?;

            println!(
                "Set {} budget for '{}': {}",
                budget.period,
                budget.category,
                format_limit(&budget.limit, symbol)
            );
        }

        BudgetCommands::Split {
            category,
            weekday,
            weekend,
            period,
        } => {
            let weekday = parse_amount(&weekday)?;
            let weekend = parse_amount(&weekend)?;
            let period = period.unwrap_or(settings.default_period);
            let budget = storage.upsert_budget(Budget::split(
                user.clone(),
                category,
                weekday,
                weekend,
                period,
            ))?;

            println!(
                "Set {} budget for '{}': {}",
                budget.period,
                budget.category,
                format_limit(&budget.limit, symbol)
            );
        }

        BudgetCommands::List => {
            let budgets = storage.budgets.get_for_user(user)?;
            println!("{}", format_budget_list(&budgets, symbol));
        }

        BudgetCommands::Remove { category } => {
            storage.remove_budget(user, &category)?;
            println!("Removed budget for '{}'", category);
        }

        BudgetCommands::Pacing { category, at, json } => {
            let now = resolve_now(at.as_deref())?;
            let service = SummaryService::new(storage, settings);
            let pacing = service.budget_pacing(user, &category, now)?;

            if json {
                print_json(&pacing)?;
            } else {
                print!("{}", format_pacing(&category, &pacing, symbol));
            }
        }
    }

    Ok(())
}
