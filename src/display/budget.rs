//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Budget, BudgetLimit};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Limit")]
    limit: String,
}

/// Describe a budget's ceiling, e.g. `$400.00` or `$20.00/weekday, $45.00/weekend day`
pub fn format_limit(limit: &BudgetLimit, symbol: &str) -> String {
    match limit {
        BudgetLimit::Flat { amount } => amount.format_with_symbol(symbol),
        BudgetLimit::Split {
            weekday_amount,
            weekend_amount,
        } => format!(
            "{}/weekday, {}/weekend day",
            weekday_amount.format_with_symbol(symbol),
            weekend_amount.format_with_symbol(symbol)
        ),
    }
}

/// Format a user's budgets as a table
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.".to_string();
    }

    let rows: Vec<_> = budgets
        .iter()
        .map(|b| BudgetRow {
            category: b.category.clone(),
            period: b.period.to_string(),
            limit: format_limit(&b.limit, symbol),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PeriodKind, UserId};

    #[test]
    fn test_budget_list() {
        let user = UserId::new("sam").unwrap();
        let budgets = vec![
            Budget::flat(user.clone(), "Rent", Money::from_cents(120000), PeriodKind::Monthly),
            Budget::split(
                user,
                "Food",
                Money::from_cents(2000),
                Money::from_cents(4500),
                PeriodKind::Weekly,
            ),
        ];

        let table = format_budget_list(&budgets, "$");
        assert!(table.contains("$1200.00"));
        assert!(table.contains("$20.00/weekday, $45.00/weekend day"));
        assert!(table.contains("weekly"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_budget_list(&[], "$"), "No budgets found.");
    }
}
