//! Spending aggregation
//!
//! Sums expense amounts into a period total and per-category buckets, split
//! by weekday and weekend. The caller is responsible for handing in only the
//! expenses that belong to the period and user.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{PaceError, PaceResult};
use crate::models::{Expense, Money, Period};

/// Aggregated spending for a period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingTotals {
    pub total_spent: Money,
    pub by_category: BTreeMap<String, Money>,
    pub by_category_weekday: BTreeMap<String, Money>,
    pub by_category_weekend: BTreeMap<String, Money>,
    pub expense_count: usize,
}

impl SpendingTotals {
    /// Total spent in a category (zero when absent)
    pub fn spent_in(&self, category: &str) -> Money {
        lookup(&self.by_category, category)
    }

    /// Weekday spending in a category
    pub fn weekday_spent_in(&self, category: &str) -> Money {
        lookup(&self.by_category_weekday, category)
    }

    /// Weekend spending in a category
    pub fn weekend_spent_in(&self, category: &str) -> Money {
        lookup(&self.by_category_weekend, category)
    }

    /// The category with the most spending, ties broken by name
    pub fn top_category(&self) -> Option<(&str, Money)> {
        self.by_category
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, amount)| (name.as_str(), *amount))
    }
}

fn lookup(map: &BTreeMap<String, Money>, category: &str) -> Money {
    let category = category.trim();
    map.iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case(category))
        .map(|(_, amount)| *amount)
        .sum()
}

/// Add to the bucket whose name matches case-insensitively, creating it
/// under this spelling if none does
fn add_to_bucket(map: &mut BTreeMap<String, Money>, category: &str, amount: Money) {
    let category = category.trim();
    let key = map
        .keys()
        .find(|name| name.eq_ignore_ascii_case(category))
        .cloned()
        .unwrap_or_else(|| category.to_string());
    *map.entry(key).or_default() += amount;
}

/// Sum expenses into totals
///
/// Expenses are accumulated in ascending date order (ties keep their input
/// order). Weekday/weekend classification uses each expense's own date.
/// Category names that differ only in case share one bucket, named after
/// the earliest expense's spelling.
///
/// # Errors
///
/// Returns a validation error if any expense amount is negative.
pub fn aggregate(expenses: &[Expense], period: &Period) -> PaceResult<SpendingTotals> {
    if let Some(bad) = expenses.iter().find(|e| e.amount.is_negative()) {
        return Err(PaceError::Validation(format!(
            "expense {} has negative amount {}",
            bad.id, bad.amount
        )));
    }

    let mut ordered: Vec<&Expense> = expenses.iter().collect();
    ordered.sort_by_key(|e| e.date);

    let mut totals = SpendingTotals {
        expense_count: ordered.len(),
        ..SpendingTotals::default()
    };

    for expense in ordered {
        totals.total_spent += expense.amount;
        add_to_bucket(&mut totals.by_category, &expense.category, expense.amount);

        let bucket = if period.is_weekend(expense.date) {
            &mut totals.by_category_weekend
        } else {
            &mut totals.by_category_weekday
        };
        add_to_bucket(bucket, &expense.category, expense.amount);
    }

    debug!(
        expenses = totals.expense_count,
        categories = totals.by_category.len(),
        total_spent = %totals.total_spent,
        "aggregated spending"
    );

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodKind, UserId};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn expense(cents: i64, category: &str, date: NaiveDateTime) -> Expense {
        Expense::new(
            UserId::new("default-user").unwrap(),
            Money::from_cents(cents),
            "test",
            Some(category),
            date,
        )
    }

    fn october() -> Period {
        Period::resolve(at(18, 12), PeriodKind::Monthly).unwrap()
    }

    #[test]
    fn test_aggregate_by_category_and_day_kind() {
        let expenses = vec![
            // Saturday
            expense(2500, "Dining", at(17, 19)),
            // Monday
            expense(1200, "Dining", at(12, 13)),
            expense(6000, "Groceries", at(14, 18)),
            // Sunday
            expense(800, "Coffee", at(18, 9)),
        ];

        let totals = aggregate(&expenses, &october()).unwrap();

        assert_eq!(totals.total_spent.cents(), 10500);
        assert_eq!(totals.expense_count, 4);
        assert_eq!(totals.spent_in("Dining").cents(), 3700);
        assert_eq!(totals.weekday_spent_in("Dining").cents(), 1200);
        assert_eq!(totals.weekend_spent_in("Dining").cents(), 2500);
        assert_eq!(totals.weekend_spent_in("Coffee").cents(), 800);
        assert_eq!(totals.weekday_spent_in("Coffee"), Money::zero());
        assert_eq!(totals.spent_in("Travel"), Money::zero());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let expenses = vec![expense(500, "Food", at(5, 10))];
        let totals = aggregate(&expenses, &october()).unwrap();
        assert_eq!(totals.spent_in("food").cents(), 500);
    }

    #[test]
    fn test_spellings_share_one_bucket() {
        let expenses = vec![
            expense(1000, "Food", at(5, 10)),
            expense(500, "food", at(6, 10)),
            // Saturday
            expense(250, "FOOD ", at(3, 10)),
        ];
        let totals = aggregate(&expenses, &october()).unwrap();

        assert_eq!(totals.by_category.len(), 1);
        // Oct 3 is the earliest expense
        assert_eq!(totals.by_category.get("FOOD"), Some(&Money::from_cents(1750)));
        assert_eq!(totals.spent_in("Food").cents(), 1750);
        assert_eq!(totals.weekday_spent_in("food").cents(), 1500);
        assert_eq!(totals.weekend_spent_in("Food").cents(), 250);
    }

    #[test]
    fn test_order_does_not_change_totals() {
        let mut expenses = vec![
            expense(333, "A", at(3, 1)),
            expense(1, "B", at(1, 1)),
            expense(4999, "A", at(2, 1)),
        ];
        let forward = aggregate(&expenses, &october()).unwrap();
        expenses.reverse();
        let backward = aggregate(&expenses, &october()).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward.total_spent.cents(), 5333);
    }

    #[test]
    fn test_empty_expenses() {
        let totals = aggregate(&[], &october()).unwrap();
        assert_eq!(totals.total_spent, Money::zero());
        assert!(totals.by_category.is_empty());
        assert!(totals.top_category().is_none());
    }

    #[test]
    fn test_top_category() {
        let expenses = vec![
            expense(500, "Coffee", at(1, 8)),
            expense(2000, "Rent", at(1, 9)),
            expense(2000, "Fuel", at(2, 9)),
        ];
        let totals = aggregate(&expenses, &october()).unwrap();
        // Tie goes to the alphabetically first name
        assert_eq!(totals.top_category(), Some(("Fuel", Money::from_cents(2000))));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let expenses = vec![expense(-100, "Food", at(1, 8))];
        let err = aggregate(&expenses, &october()).unwrap_err();
        assert!(err.is_validation());
    }
}
