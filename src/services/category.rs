//! Category budget resolution
//!
//! Turns each budget plus the period's aggregated spending into a
//! [`CategoryPacing`], choosing between the flat and the weekday/weekend
//! split computation.

use serde::Serialize;
use tracing::debug;

use crate::error::{PaceError, PaceResult};
use crate::models::{Budget, BudgetLimit, Money, Period, PeriodKind};
use crate::services::spending::SpendingTotals;

/// Average weeks per month used to normalize weekly budgets
pub const DEFAULT_WEEKS_PER_MONTH: f64 = 4.33;

/// Budget status of one category over a period
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPacing {
    pub category: String,
    /// Period the budget was declared for
    pub period: PeriodKind,
    pub budget_total: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percentage_used: f64,
    pub safe_to_spend_today: Money,
    /// `spent <= budget_total`; not the pacing-based check
    pub is_budget_on_track: bool,
    pub weekday_spent: Money,
    pub weekend_spent: Money,
    pub has_separate_budgets: bool,
    pub is_today_weekend: bool,
}

/// Per-category results and their aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub categories: Vec<CategoryPacing>,
    /// Sum of every budget's ceiling normalized to the period kind
    pub total_budget: Money,
    /// Sum of each category's own safe-to-spend-today
    pub safe_to_spend_today: Money,
}

/// Resolve one budget against the period's spending
///
/// # Errors
///
/// Returns a validation error if the budget has a blank category or a
/// negative amount.
pub fn resolve_category(
    budget: &Budget,
    totals: &SpendingTotals,
    period: &Period,
) -> PaceResult<CategoryPacing> {
    budget
        .validate()
        .map_err(|e| PaceError::Validation(format!("{} ({})", e, budget.category)))?;

    let spent = totals.spent_in(&budget.category);
    let weekday_spent = totals.weekday_spent_in(&budget.category);
    let weekend_spent = totals.weekend_spent_in(&budget.category);
    let is_today_weekend = period.is_today_weekend();

    let budget_total = budget.limit.ceiling_for(period);
    let remaining = (budget_total - spent).clamp_non_negative();

    let safe_to_spend_today = match budget.limit {
        BudgetLimit::Split {
            weekday_amount,
            weekend_amount,
        } => {
            let (per_day, days_of_kind, spent_of_kind, remaining_of_kind) = if is_today_weekend {
                (
                    weekend_amount,
                    period.weekend_days_total,
                    weekend_spent,
                    period.weekend_days_remaining,
                )
            } else {
                (
                    weekday_amount,
                    period.weekday_days_total,
                    weekday_spent,
                    period.weekday_days_remaining,
                )
            };

            // No remaining days of this kind: today gets the whole leftover
            (per_day.times(i64::from(days_of_kind)) - spent_of_kind)
                .clamp_non_negative()
                .divide(i64::from(remaining_of_kind.max(1)))
        }
        BudgetLimit::Flat { .. } => {
            if period.days_remaining > 0 {
                remaining.divide(i64::from(period.days_remaining))
            } else {
                Money::zero()
            }
        }
    };

    Ok(CategoryPacing {
        category: budget.category.clone(),
        period: budget.period,
        budget_total,
        spent,
        remaining,
        percentage_used: spent.percent_of(budget_total),
        safe_to_spend_today,
        is_budget_on_track: spent <= budget_total,
        weekday_spent,
        weekend_spent,
        has_separate_budgets: budget.has_separate_budgets(),
        is_today_weekend,
    })
}

/// Resolve every budget and roll the results up
///
/// `total_budget` normalizes flat budgets declared for a different period
/// kind with `weeks_per_month` (weekly amounts are multiplied by it for a
/// monthly period, monthly amounts divided by it for a weekly one). Split
/// budgets already resolve to a whole-period figure and are added as is.
///
/// # Errors
///
/// Returns a validation error if `weeks_per_month` is not a positive finite
/// number or any budget is invalid.
pub fn resolve_all(
    budgets: &[Budget],
    totals: &SpendingTotals,
    period: &Period,
    weeks_per_month: f64,
) -> PaceResult<CategorySummary> {
    if !weeks_per_month.is_finite() || weeks_per_month <= 0.0 {
        return Err(PaceError::Validation(format!(
            "weeks per month must be a positive number, got {}",
            weeks_per_month
        )));
    }

    let mut categories = Vec::with_capacity(budgets.len());
    let mut total_budget = Money::zero();
    let mut safe_to_spend_today = Money::zero();

    for budget in budgets {
        let pacing = resolve_category(budget, totals, period)?;

        total_budget += normalized_ceiling(budget, &pacing, period.kind, weeks_per_month);
        safe_to_spend_today += pacing.safe_to_spend_today;
        categories.push(pacing);
    }

    debug!(
        budgets = budgets.len(),
        total_budget = %total_budget,
        safe_to_spend_today = %safe_to_spend_today,
        "resolved category budgets"
    );

    Ok(CategorySummary {
        categories,
        total_budget,
        safe_to_spend_today,
    })
}

fn normalized_ceiling(
    budget: &Budget,
    pacing: &CategoryPacing,
    target: PeriodKind,
    weeks_per_month: f64,
) -> Money {
    match (budget.limit, budget.period, target) {
        (BudgetLimit::Split { .. }, _, _) => pacing.budget_total,
        (BudgetLimit::Flat { amount }, PeriodKind::Weekly, PeriodKind::Monthly) => {
            amount.scale(weeks_per_month)
        }
        (BudgetLimit::Flat { amount }, PeriodKind::Monthly, PeriodKind::Weekly) => {
            amount.scale(1.0 / weeks_per_month)
        }
        (BudgetLimit::Flat { amount }, _, _) => amount,
    }
}
