//! Pacing display formatting
//!
//! Renders pacing results and category summaries for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::services::{BudgetPacing, CategoryPacing, MonthlySummary};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Today")]
    today: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl CategoryRow {
    fn new(pacing: &CategoryPacing, symbol: &str) -> Self {
        let category = if pacing.has_separate_budgets {
            format!("{} (split)", pacing.category)
        } else {
            pacing.category.clone()
        };

        Self {
            category,
            budget: pacing.budget_total.format_with_symbol(symbol),
            spent: pacing.spent.format_with_symbol(symbol),
            remaining: pacing.remaining.format_with_symbol(symbol),
            used: format!("{:.1}%", pacing.percentage_used),
            today: pacing.safe_to_spend_today.format_with_symbol(symbol),
            status: if pacing.is_budget_on_track { "ok" } else { "OVER" },
        }
    }
}

/// Format per-category pacing as a table
pub fn format_category_table(categories: &[CategoryPacing], symbol: &str) -> String {
    if categories.is_empty() {
        return "No budgets found.\n\nRun 'spendpace budget set <category> <amount>' to add one."
            .to_string();
    }

    let rows: Vec<_> = categories
        .iter()
        .map(|c| CategoryRow::new(c, symbol))
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the month-to-date summary
pub fn format_monthly_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", summary.period));
    output.push_str(&format!(
        "Day {} of {} ({} remaining)\n\n",
        summary.days_elapsed, summary.days_total, summary.remaining_days
    ));
    output.push_str(&format_category_table(&summary.categories, symbol));
    output.push_str("\n\n");
    output.push_str(&format!(
        "Total budget:       {}\n",
        summary.total_budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total spent:        {} ({:.1}%)\n",
        summary.total_spent.format_with_symbol(symbol),
        summary.percentage_used
    ));
    output.push_str(&format!(
        "Remaining:          {}\n",
        summary.remaining.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Safe to spend today: {}\n",
        summary.safe_to_spend_today.format_with_symbol(symbol)
    ));

    output
}

/// Format a pacing result under a heading
pub fn format_pacing(title: &str, pacing: &BudgetPacing, symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!("{}\n", title));
    output.push_str(&format!("  Budget:          {}\n", money(pacing.total_budget)));
    output.push_str(&format!("  Spent:           {}\n", money(pacing.spent)));
    output.push_str(&format!("  Expected by now: {}\n", money(pacing.expected_spent)));
    output.push_str(&format!(
        "  Pacing:          {:.1}%{}\n",
        pacing.pacing,
        if pacing.is_pacing_on_track { "" } else { " (ahead of budget)" }
    ));
    output.push_str(&format!(
        "  Day:             {} of {} ({} remaining)\n",
        pacing.days_elapsed, pacing.days_total, pacing.remaining_days
    ));
    output.push_str(&format!("  Safe to spend:   {}\n", money(pacing.safe_to_spend)));
    output.push_str(&format!("  Per day:         {}\n", money(pacing.daily_allowance)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Period, PeriodKind};
    use crate::services::calculate_pacing;
    use chrono::NaiveDate;

    fn sample_category(split: bool, on_track: bool) -> CategoryPacing {
        CategoryPacing {
            category: "Food".into(),
            period: PeriodKind::Monthly,
            budget_total: Money::from_cents(30000),
            spent: Money::from_cents(12000),
            remaining: Money::from_cents(18000),
            percentage_used: 40.0,
            safe_to_spend_today: Money::from_cents(1385),
            is_budget_on_track: on_track,
            weekday_spent: Money::from_cents(12000),
            weekend_spent: Money::zero(),
            has_separate_budgets: split,
            is_today_weekend: true,
        }
    }

    #[test]
    fn test_category_table() {
        let table = format_category_table(&[sample_category(true, false)], "$");
        assert!(table.contains("Food (split)"));
        assert!(table.contains("$300.00"));
        assert!(table.contains("40.0%"));
        assert!(table.contains("OVER"));
    }

    #[test]
    fn test_empty_category_table() {
        assert!(format_category_table(&[], "$").starts_with("No budgets found."));
    }

    #[test]
    fn test_format_pacing() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let period = Period::resolve(now, PeriodKind::Monthly).unwrap();
        let pacing = calculate_pacing(Money::from_cents(31000), Money::from_cents(20000), &period).unwrap();

        let text = format_pacing("Food", &pacing, "€");
        assert!(text.starts_with("Food\n"));
        assert!(text.contains("€310.00"));
        assert!(text.contains("18 of 31"));
        assert!(text.contains("ahead of budget"));
    }
}
