//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod summary;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use summary::{handle_monthly_summary, handle_overview, handle_review};

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::error::{PaceError, PaceResult};
use crate::models::period::parse_timestamp;
use crate::models::Money;

/// Parse an optional `--at`/`--date` argument, defaulting to the local time
pub(crate) fn resolve_now(at: Option<&str>) -> PaceResult<NaiveDateTime> {
    match at {
        Some(s) => parse_timestamp(s).map_err(|e| PaceError::Validation(e.to_string())),
        None => Ok(Local::now().naive_local()),
    }
}

/// Parse a money amount given on the command line
pub(crate) fn parse_amount(s: &str) -> PaceResult<Money> {
    Money::parse(s).map_err(|e| PaceError::Validation(e.to_string()))
}

/// Print a value as pretty JSON
pub(crate) fn print_json<T: Serialize>(value: &T) -> PaceResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
