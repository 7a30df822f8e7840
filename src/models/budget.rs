//! Budget model
//!
//! A budget caps spending in one category over a weekly or monthly period.
//! The ceiling is either one flat amount for the whole period, or a pair of
//! per-day ceilings for weekdays and weekend days.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, UserId};
use super::money::Money;
use super::period::{Period, PeriodKind};

/// How a budget's ceiling is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BudgetLimit {
    /// One ceiling for the whole period
    Flat { amount: Money },

    /// Separate per-day ceilings for weekdays and weekend days
    Split {
        #[serde(rename = "weekdayAmount")]
        weekday_amount: Money,
        #[serde(rename = "weekendAmount")]
        weekend_amount: Money,
    },
}

impl BudgetLimit {
    /// The ceiling over a resolved period
    ///
    /// Flat limits ignore day counts; split limits multiply each per-day
    /// ceiling by the number of days of that kind in the period.
    pub fn ceiling_for(&self, period: &Period) -> Money {
        match *self {
            Self::Flat { amount } => amount,
            Self::Split {
                weekday_amount,
                weekend_amount,
            } => {
                weekday_amount.times(i64::from(period.weekday_days_total))
                    + weekend_amount.times(i64::from(period.weekend_days_total))
            }
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }
}

/// A spending budget for a single category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Owner of this budget
    pub user_id: UserId,

    /// Category name this budget applies to
    pub category: String,

    /// The period the ceiling is declared for
    #[serde(default)]
    pub period: PeriodKind,

    /// Flat or split ceiling
    #[serde(flatten)]
    pub limit: BudgetLimit,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a budget with one ceiling for the whole period
    pub fn flat(
        user_id: UserId,
        category: impl Into<String>,
        amount: Money,
        period: PeriodKind,
    ) -> Self {
        Self::with_limit(user_id, category, BudgetLimit::Flat { amount }, period)
    }

    /// Create a budget with separate weekday and weekend per-day ceilings
    pub fn split(
        user_id: UserId,
        category: impl Into<String>,
        weekday_amount: Money,
        weekend_amount: Money,
        period: PeriodKind,
    ) -> Self {
        Self::with_limit(
            user_id,
            category,
            BudgetLimit::Split {
                weekday_amount,
                weekend_amount,
            },
            period,
        )
    }

    fn with_limit(
        user_id: UserId,
        category: impl Into<String>,
        limit: BudgetLimit,
        period: PeriodKind,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            user_id,
            category: category.into().trim().to_string(),
            period,
            limit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the ceiling and period, keeping identity
    pub fn set_limit(&mut self, limit: BudgetLimit, period: PeriodKind) {
        self.limit = limit;
        self.period = period;
        self.updated_at = Utc::now();
    }

    /// Whether weekday and weekend spending are budgeted separately
    pub fn has_separate_budgets(&self) -> bool {
        self.limit.is_split()
    }

    /// Check if this budget applies to the given category (case-insensitive)
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category.trim())
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        let amounts = match self.limit {
            BudgetLimit::Flat { amount } => [amount, amount],
            BudgetLimit::Split {
                weekday_amount,
                weekend_amount,
            } => [weekday_amount, weekend_amount],
        };
        if amounts.iter().any(Money::is_negative) {
            return Err(BudgetValidationError::NegativeAmount);
        }
        if !amounts.iter().all(Money::is_within_range) {
            return Err(BudgetValidationError::AmountTooLarge);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limit {
            BudgetLimit::Flat { amount } => {
                write!(f, "{}: {} {}", self.category, amount, self.period)
            }
            BudgetLimit::Split {
                weekday_amount,
                weekend_amount,
            } => write!(
                f,
                "{}: {}/weekday, {}/weekend ({})",
                self.category, weekday_amount, weekend_amount, self.period
            ),
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeAmount,
    AmountTooLarge,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NegativeAmount => write!(f, "Budget amount cannot be negative"),
            Self::AmountTooLarge => write!(f, "Budget amount is too large"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
