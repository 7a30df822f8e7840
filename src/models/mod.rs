//! Core data models for SpendPace
//!
//! This module contains the data structures the pacing engine works on:
//! budgets, expenses, money, and resolved periods.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetLimit, BudgetValidationError};
pub use expense::{Expense, ExpenseValidationError, DEFAULT_CATEGORY};
pub use ids::{BudgetId, ExpenseId, UserId};
pub use money::Money;
pub use period::{DateRange, Period, PeriodKind};
