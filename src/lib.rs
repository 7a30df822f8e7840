//! SpendPace - budget pacing and safe-to-spend engine
//!
//! Given category budgets (flat, or split into weekday and weekend per-day
//! ceilings) and recorded expenses, SpendPace resolves the current weekly or
//! monthly period and reports how spending is pacing against an even spread,
//! how much budget remains, and how much is safe to spend today.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, periods, budgets and expenses
//! - `services`: Aggregation, pacing and category resolution
//! - `storage`: JSON file storage behind the `BudgetStore` trait
//! - `reports`: Weekly review and insights
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the `spendpace` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use spendpace::models::{Period, PeriodKind};
//! use spendpace::services::{aggregate, calculate_pacing};
//!
//! let period = Period::resolve(now, PeriodKind::Monthly)?;
//! let totals = aggregate(&expenses, &period)?;
//! let pacing = calculate_pacing(budget_total, totals.total_spent, &period)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PaceError, PaceResult};
