//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json, with a per-user index

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::PaceError;
use crate::models::{DateRange, Expense, ExpenseId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expense persistence with a user index
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: user_id -> expense_ids
    by_user: RwLock<HashMap<UserId, Vec<ExpenseId>>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_user: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and build the user index
    pub fn load(&self) -> Result<(), PaceError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_user.clear();

        for expense in file_data.expenses {
            by_user
                .entry(expense.user_id.clone())
                .or_default()
                .push(expense.id);
            data.insert(expense.id, expense);
        }

        debug!(count = data.len(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk, oldest first
    pub fn save(&self) -> Result<(), PaceError> {
        let data = self
            .data
            .read()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.created_at.cmp(&b.created_at)));

        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    /// Record a new expense
    pub fn add(&self, expense: Expense) -> Result<Expense, PaceError> {
        expense
            .validate()
            .map_err(|e| PaceError::Validation(e.to_string()))?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        by_user
            .entry(expense.user_id.clone())
            .or_default()
            .push(expense.id);
        data.insert(expense.id, expense.clone());

        info!(
            user = %expense.user_id,
            category = %expense.category,
            amount = %expense.amount,
            "recorded expense"
        );
        Ok(expense)
    }

    /// A user's expenses within `[range.start, range.end)`, optionally in one category
    ///
    /// Results are ordered by date.
    pub fn get_in_range(
        &self,
        user: &UserId,
        range: &DateRange,
        category: Option<&str>,
    ) -> Result<Vec<Expense>, PaceError> {
        let mut expenses = self.collect_for_user(user, |e| {
            range.contains(e.date) && category.map_or(true, |c| e.matches_category(c))
        })?;
        expenses.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(expenses)
    }

    /// A user's most recent expenses, newest first
    pub fn get_recent(&self, user: &UserId, limit: usize) -> Result<Vec<Expense>, PaceError> {
        let mut expenses = self.collect_for_user(user, |_| true)?;
        expenses.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        expenses.truncate(limit);
        Ok(expenses)
    }

    /// Count all expenses
    pub fn count(&self) -> Result<usize, PaceError> {
        let data = self
            .data
            .read()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }

    fn collect_for_user<F>(&self, user: &UserId, keep: F) -> Result<Vec<Expense>, PaceError>
    where
        F: Fn(&Expense) -> bool,
    {
        let data = self
            .data
            .read()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_user = self
            .by_user
            .read()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(by_user
            .get(user)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| data.get(id))
                    .filter(|e| keep(e))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
