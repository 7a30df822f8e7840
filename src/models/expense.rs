//! Expense model
//!
//! An expense is a single dated outflow in one category. Expenses are
//! read-only to the pacing engine once recorded.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, UserId};
use super::money::Money;

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "Other";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Owner of this expense
    pub user_id: UserId,

    /// Amount spent (never negative)
    pub amount: Money,

    /// What the money was spent on
    pub description: String,

    /// Category name
    #[serde(default = "default_category")]
    pub category: String,

    /// Local wall-clock time of the expense
    pub date: NaiveDateTime,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    ///
    /// A blank category falls back to [`DEFAULT_CATEGORY`].
    pub fn new(
        user_id: UserId,
        amount: Money,
        description: impl Into<String>,
        category: Option<&str>,
        date: NaiveDateTime,
    ) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .unwrap_or_else(default_category);

        Self {
            id: ExpenseId::new(),
            user_id,
            amount,
            description: description.into().trim().to_string(),
            category,
            date,
            created_at: Utc::now(),
        }
    }

    /// Check if this expense belongs to the given category (case-insensitive)
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category.trim())
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        if !self.amount.is_within_range() {
            return Err(ExpenseValidationError::AmountTooLarge);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.description,
            self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
    AmountTooLarge,
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::AmountTooLarge => write!(f, "Expense amount is too large"),
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn user() -> UserId {
        UserId::new("default-user").unwrap()
    }

    #[test]
    fn test_new_expense_defaults_category() {
        let expense = Expense::new(user(), Money::from_cents(450), " Coffee ", None, noon(18));
        assert_eq!(expense.category, DEFAULT_CATEGORY);
        assert_eq!(expense.description, "Coffee");

        let blank = Expense::new(user(), Money::from_cents(450), "Coffee", Some("  "), noon(18));
        assert_eq!(blank.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_validation() {
        let expense = Expense::new(user(), Money::from_cents(-1), "Refund", Some("Food"), noon(1));
        assert_eq!(expense.validate(), Err(ExpenseValidationError::NegativeAmount));

        let expense = Expense::new(user(), Money::from_cents(100), "", Some("Food"), noon(1));
        assert_eq!(expense.validate(), Err(ExpenseValidationError::EmptyDescription));

        let expense = Expense::new(user(), Money::zero(), "Free sample", Some("Food"), noon(1));
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_huge_amount() {
        let expense = Expense::new(user(), Money::from_cents(i64::MAX), "Yacht", Some("Fun"), noon(1));
        assert_eq!(expense.validate(), Err(ExpenseValidationError::AmountTooLarge));

        let ok = Money::parse("90000000000000").unwrap();
        let expense = Expense::new(user(), ok, "Island", Some("Fun"), noon(1));
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new(user(), Money::from_cents(1299), "Lunch", Some("Food"), noon(5));
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["amount"], 12.99);
        assert_eq!(value["date"], "2026-10-05T12:00:00");

        let deserialized: Expense = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized.amount, expense.amount);
        assert!(deserialized.matches_category("FOOD"));
    }
}
