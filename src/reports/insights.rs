//! Weekly insights
//!
//! Plain-language observations about a week's spending.

use serde::Serialize;

use crate::models::{Budget, Money, Period};
use crate::services::SpendingTotals;

/// What an insight is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    TopCategory,
    OverBudget,
    Warning,
    OnTrack,
    Pattern,
    CategoryOver,
}

/// A single generated insight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// Share of budget used above which a warning is raised
const WARNING_PERCENT: f64 = 80.0;

/// Generate insights for one week of spending
///
/// Order: top category, overall budget status (skipped when `total_budget`
/// is zero), daily average, then one entry per budgeted category that is
/// over its ceiling for `period`.
pub fn generate_weekly_insights(
    totals: &SpendingTotals,
    budgets: &[Budget],
    period: &Period,
    total_budget: Money,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some((category, amount)) = totals.top_category() {
        insights.push(Insight::new(
            InsightKind::TopCategory,
            format!("You spent the most on {} this week - {}.", category, amount),
        ));
    }

    let spent = totals.total_spent;
    if total_budget.is_positive() {
        let used = spent.percent_of(total_budget);
        let status = if used > 100.0 {
            Insight::new(
                InsightKind::OverBudget,
                format!(
                    "You've used {:.0}% of your budget this week. Consider cutting back on non-essentials.",
                    used
                ),
            )
        } else if used > WARNING_PERCENT {
            Insight::new(
                InsightKind::Warning,
                format!(
                    "You've used {:.0}% of your budget. Watch your spending for the rest of the week.",
                    used
                ),
            )
        } else {
            Insight::new(
                InsightKind::OnTrack,
                format!(
                    "You're doing great! You've used {:.0}% of your budget and still have {} left.",
                    used,
                    total_budget - spent
                ),
            )
        };
        insights.push(status);
    }

    insights.push(Insight::new(
        InsightKind::Pattern,
        format!("You're averaging {} per day this week.", spent.divide(7)),
    ));

    for budget in budgets {
        let used = totals
            .spent_in(&budget.category)
            .percent_of(budget.limit.ceiling_for(period));
        if used > 100.0 {
            insights.push(Insight::new(
                InsightKind::CategoryOver,
                format!(
                    "Your {} spending is at {:.0}% of its budget.",
                    budget.category, used
                ),
            ));
        }
    }

    insights
}
