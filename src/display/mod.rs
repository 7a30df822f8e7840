//! Display formatting for terminal output
//!
//! Tables and summaries for budgets, expenses and pacing results.

pub mod budget;
pub mod expense;
pub mod pacing;

pub use budget::{format_budget_list, format_limit};
pub use expense::format_expense_list;
pub use pacing::{format_category_table, format_monthly_summary, format_pacing};
