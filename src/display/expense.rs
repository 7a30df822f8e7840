//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_list(expenses: &[Expense], date_format: &str, symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<_> = expenses
        .iter()
        .map(|e| ExpenseRow {
            date: e.date.format(date_format).to_string(),
            category: e.category.clone(),
            description: truncate(&e.description, 40),
            amount: e.amount.format_with_symbol(symbol),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, UserId};
    use chrono::NaiveDate;

    #[test]
    fn test_expense_list() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let expenses = vec![Expense::new(
            UserId::new("sam").unwrap(),
            Money::from_cents(450),
            "Flat white",
            Some("Coffee"),
            date,
        )];

        let table = format_expense_list(&expenses, "%Y-%m-%d", "$");
        assert!(table.contains("2026-10-18"));
        assert!(table.contains("Flat white"));
        assert!(table.contains("$4.50"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }
}
