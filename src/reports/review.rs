//! Weekly Review
//!
//! Summarizes the current week: totals against budget, spending by category,
//! recent expenses and generated insights.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::PaceResult;
use crate::models::{Expense, Money, Period, PeriodKind, UserId};
use crate::reports::insights::{generate_weekly_insights, Insight};
use crate::services::aggregate;
use crate::storage::BudgetStore;

/// Number of expenses listed in a review
pub const RECENT_EXPENSE_LIMIT: usize = 10;

/// Weekly Review
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReview {
    pub period_start: NaiveDateTime,
    pub period_end: NaiveDateTime,
    pub total_budget: Money,
    pub total_spent: Money,
    /// Budget left, clamped to zero
    pub remaining: Money,
    pub percentage_used: f64,
    pub category_spending: BTreeMap<String, Money>,
    /// Latest expenses of the week, newest first
    pub recent_expenses: Vec<Expense>,
    pub insights: Vec<Insight>,
    /// Spent no more than the budget this week
    pub is_under_budget: bool,
}

impl WeeklyReview {
    /// Generate the review for the week containing `now`
    pub fn generate<S: BudgetStore>(
        store: &S,
        user: &UserId,
        now: NaiveDateTime,
    ) -> PaceResult<Self> {
        let period = Period::resolve(now, PeriodKind::Weekly)?;
        let budgets = store.budgets(user)?;
        let mut expenses = store.expenses(user, &period.range(), None)?;

        let totals = aggregate(&expenses, &period)?;
        let total_budget: Money = budgets.iter().map(|b| b.limit.ceiling_for(&period)).sum();
        let total_spent = totals.total_spent;
        let insights = generate_weekly_insights(&totals, &budgets, &period, total_budget);

        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses.truncate(RECENT_EXPENSE_LIMIT);

        Ok(Self {
            period_start: period.start,
            period_end: period.end,
            total_budget,
            total_spent,
            remaining: (total_budget - total_spent).clamp_non_negative(),
            percentage_used: total_spent.percent_of(total_budget),
            category_spending: totals.by_category,
            recent_expenses: expenses,
            insights,
            is_under_budget: total_spent <= total_budget,
        })
    }

    /// Format the review for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Weekly Review: {} to {}\n",
            self.period_start.format("%Y-%m-%d"),
            self.period_end.format("%Y-%m-%d")
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Budget:    {}\n", self.total_budget));
        output.push_str(&format!("Spent:     {}\n", self.total_spent));
        output.push_str(&format!("Remaining: {}\n", self.remaining));
        output.push_str(&format!("Used:      {:.1}%\n", self.percentage_used));

        if !self.category_spending.is_empty() {
            output.push_str("\nBy category:\n");
            for (category, amount) in &self.category_spending {
                output.push_str(&format!("  {:<30} {:>12}\n", category, amount.to_string()));
            }
        }

        if !self.recent_expenses.is_empty() {
            output.push_str("\nRecent expenses:\n");
            for expense in &self.recent_expenses {
                output.push_str(&format!("  {}\n", expense));
            }
        }

        output.push_str("\nInsights:\n");
        for insight in &self.insights {
            output.push_str(&format!("  - {}\n", insight.message));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PacePaths;
    use crate::models::Budget;
    use crate::reports::insights::InsightKind;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_generate_weekly_review() {
        let (_temp_dir, storage) = create_test_storage();
        let sam = UserId::new("sam").unwrap();

        storage
            .upsert_budget(Budget::flat(sam.clone(), "Food", Money::from_cents(10000), PeriodKind::Weekly))
            .unwrap();
        for day in 18..=24 {
            storage
                .add_expense(Expense::new(
                    sam.clone(),
                    Money::from_cents(500),
                    format!("Coffee {}", day),
                    Some("Food"),
                    at(day, 8),
                ))
                .unwrap();
        }
        storage
            .add_expense(Expense::new(sam.clone(), Money::from_cents(9000), "Shoes", Some("Clothes"), at(19, 15)))
            .unwrap();
        // Previous week
        storage
            .add_expense(Expense::new(sam.clone(), Money::from_cents(100), "Old", None, at(17, 23)))
            .unwrap();

        let review = WeeklyReview::generate(&storage, &sam, at(20, 12)).unwrap();

        assert_eq!(review.period_start, at(18, 0));
        assert_eq!(review.period_end, at(25, 0));
        assert_eq!(review.total_budget, Money::from_cents(10000));
        assert_eq!(review.total_spent, Money::from_cents(12500));
        assert_eq!(review.remaining, Money::zero());
        assert_eq!(review.percentage_used, 125.0);
        assert!(!review.is_under_budget);
        assert_eq!(review.category_spending.len(), 2);
        assert_eq!(review.recent_expenses.len(), 8);
        assert_eq!(review.recent_expenses[0].description, "Coffee 24");
        assert_eq!(review.insights[0].kind, InsightKind::TopCategory);
        assert!(review.insights[0].message.contains("Clothes"));
        assert_eq!(review.insights[1].kind, InsightKind::OverBudget);

        let text = review.format_terminal();
        assert!(text.contains("Weekly Review: 2026-10-18 to 2026-10-25"));
    }

    #[test]
    fn test_recent_expenses_are_capped() {
        let (_temp_dir, storage) = create_test_storage();
        let sam = UserId::new("sam").unwrap();

        for hour in 0..15 {
            storage
                .add_expense(Expense::new(sam.clone(), Money::from_cents(100), "Gum", None, at(19, hour)))
                .unwrap();
        }

        let review = WeeklyReview::generate(&storage, &sam, at(19, 20)).unwrap();
        assert_eq!(review.recent_expenses.len(), RECENT_EXPENSE_LIMIT);
        assert_eq!(review.total_budget, Money::zero());
        assert!(!review.is_under_budget);
    }
}
