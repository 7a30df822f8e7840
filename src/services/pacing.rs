//! Budget pacing
//!
//! Compares what has been spent against what would have been spent by now
//! if the budget were used evenly across the period.

use serde::Serialize;
use tracing::debug;

use crate::error::{PaceError, PaceResult};
use crate::models::money::round_tenth;
use crate::models::{Money, Period};

/// Pacing figures for one budget total over a period
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPacing {
    pub total_budget: Money,
    pub spent: Money,
    /// Unspent budget, clamped to zero
    pub safe_to_spend: Money,
    /// Even-spread spending expected by today
    pub expected_spent: Money,
    /// Actual over expected spending, as a percentage
    pub pacing: f64,
    pub days_elapsed: u32,
    pub days_total: u32,
    pub remaining_days: u32,
    /// Safe-to-spend spread across the remaining days
    pub daily_allowance: Money,
    /// `pacing <= 100`; differs from the budget check `spent <= total_budget`
    pub is_pacing_on_track: bool,
}

/// Calculate pacing for a budget total and amount spent
///
/// A zero budget (or zero elapsed days) yields `pacing = 0` instead of a
/// division by zero; with no days remaining the daily allowance is zero.
///
/// # Errors
///
/// Returns a validation error if either amount is negative.
pub fn calculate_pacing(
    total_budget: Money,
    spent: Money,
    period: &Period,
) -> PaceResult<BudgetPacing> {
    if total_budget.is_negative() {
        return Err(PaceError::Validation(format!(
            "budget total cannot be negative: {}",
            total_budget
        )));
    }
    if spent.is_negative() {
        return Err(PaceError::Validation(format!(
            "amount spent cannot be negative: {}",
            spent
        )));
    }

    let elapsed = i64::from(period.days_elapsed);
    let total_days = i64::from(period.days_total);

    let expected_spent = total_budget.mul_ratio(elapsed, total_days);

    // Uses the exact expected figure, not the cent-rounded one
    let expected_exact = total_budget.cents() as f64 * elapsed as f64 / total_days.max(1) as f64;
    let pacing = if expected_exact > 0.0 {
        round_tenth(spent.cents() as f64 / expected_exact * 100.0)
    } else {
        0.0
    };

    let safe_to_spend = (total_budget - spent).clamp_non_negative();
    let daily_allowance = if period.days_remaining > 0 {
        safe_to_spend.divide(i64::from(period.days_remaining))
    } else {
        Money::zero()
    };

    let result = BudgetPacing {
        total_budget,
        spent,
        safe_to_spend,
        expected_spent,
        pacing,
        days_elapsed: period.days_elapsed,
        days_total: period.days_total,
        remaining_days: period.days_remaining,
        daily_allowance,
        is_pacing_on_track: pacing <= 100.0,
    };

    debug!(
        total_budget = %total_budget,
        spent = %spent,
        pacing = result.pacing,
        daily_allowance = %result.daily_allowance,
        "calculated pacing"
    );

    Ok(result)
}
