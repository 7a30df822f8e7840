//! Summary service
//!
//! Reads budgets and expenses for one user from a [`BudgetStore`] and runs
//! them through period resolution, aggregation and pacing.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::config::Settings;
use crate::error::{PaceError, PaceResult};
use crate::models::{Money, Period, PeriodKind, UserId};
use crate::services::category::{resolve_all, CategoryPacing};
use crate::services::pacing::{calculate_pacing, BudgetPacing};
use crate::services::spending::aggregate;
use crate::storage::BudgetStore;

/// Month-to-date view across every budgeted category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub period: Period,
    /// Budgets normalized to a month
    pub total_budget: Money,
    /// Every expense in the month, budgeted or not
    pub total_spent: Money,
    pub remaining: Money,
    pub percentage_used: f64,
    pub days_elapsed: u32,
    pub days_total: u32,
    pub remaining_days: u32,
    /// Sum of the categories' own safe-to-spend-today
    pub safe_to_spend_today: Money,
    pub is_budget_on_track: bool,
    pub categories: Vec<CategoryPacing>,
}

/// Service for pacing summaries
pub struct SummaryService<'a, S: BudgetStore> {
    store: &'a S,
    settings: &'a Settings,
}

impl<'a, S: BudgetStore> SummaryService<'a, S> {
    /// Create a new summary service
    pub fn new(store: &'a S, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Pacing of a single category budget over its own period
    pub fn budget_pacing(
        &self,
        user: &UserId,
        category: &str,
        now: NaiveDateTime,
    ) -> PaceResult<BudgetPacing> {
        let budget = self
            .store
            .budget_for_category(user, category)?
            .ok_or_else(|| PaceError::budget_not_found(category))?;

        let period = Period::resolve(now, budget.period)?;
        let expenses = self
            .store
            .expenses(user, &period.range(), Some(&budget.category))?;
        let spent: Money = expenses.iter().map(|e| e.amount).sum();

        debug!(
            user = %user,
            category = %budget.category,
            expenses = expenses.len(),
            "computing budget pacing"
        );

        calculate_pacing(budget.limit.ceiling_for(&period), spent, &period)
    }

    /// Overall pacing for the current week
    ///
    /// Budget ceilings are summed as declared, without converting monthly
    /// budgets to a weekly figure.
    pub fn overview(&self, user: &UserId, now: NaiveDateTime) -> PaceResult<BudgetPacing> {
        let period = Period::resolve(now, PeriodKind::Weekly)?;
        let budgets = self.store.budgets(user)?;
        let expenses = self.store.expenses(user, &period.range(), None)?;

        let total_budget: Money = budgets.iter().map(|b| b.limit.ceiling_for(&period)).sum();
        let totals = aggregate(&expenses, &period)?;

        debug!(
            user = %user,
            budgets = budgets.len(),
            total_budget = %total_budget,
            "computing weekly overview"
        );

        calculate_pacing(total_budget, totals.total_spent, &period)
    }

    /// Month-to-date summary with a per-category breakdown
    pub fn monthly_summary(&self, user: &UserId, now: NaiveDateTime) -> PaceResult<MonthlySummary> {
        let period = Period::resolve(now, PeriodKind::Monthly)?;
        let budgets = self.store.budgets(user)?;
        let expenses = self.store.expenses(user, &period.range(), None)?;

        let totals = aggregate(&expenses, &period)?;
        let summary = resolve_all(&budgets, &totals, &period, self.settings.weeks_per_month)?;

        let total_spent = totals.total_spent;
        let remaining = (summary.total_budget - total_spent).clamp_non_negative();

        Ok(MonthlySummary {
            total_budget: summary.total_budget,
            total_spent,
            remaining,
            percentage_used: total_spent.percent_of(summary.total_budget),
            days_elapsed: period.days_elapsed,
            days_total: period.days_total,
            remaining_days: period.days_remaining,
            safe_to_spend_today: summary.safe_to_spend_today,
            is_budget_on_track: total_spent <= summary.total_budget,
            categories: summary.categories,
            period,
        })
    }
}
