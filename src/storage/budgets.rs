//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json. A user has at most
//! one budget per category (matched case-insensitively).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::info;

use crate::error::PaceError;
use crate::models::{Budget, BudgetId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<HashMap<BudgetId, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), PaceError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for budget in file_data.budgets {
            budgets.insert(budget.id, budget);
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), PaceError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by(|a, b| {
            a.user_id
                .cmp(&b.user_id)
                .then_with(|| a.category.cmp(&b.category))
        });

        write_json_atomic(&self.path, &BudgetData { budgets: list })
    }

    /// All budgets belonging to a user, ordered by category
    pub fn get_for_user(&self, user: &UserId) -> Result<Vec<Budget>, PaceError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets
            .values()
            .filter(|b| &b.user_id == user)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(list)
    }

    /// Find a user's budget for a category
    pub fn get_by_category(
        &self,
        user: &UserId,
        category: &str,
    ) -> Result<Option<Budget>, PaceError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets
            .values()
            .find(|b| &b.user_id == user && b.matches_category(category))
            .cloned())
    }

    /// Insert a budget, replacing the user's existing budget for the same category
    ///
    /// The replaced budget keeps its id and creation time. Returns the stored
    /// budget.
    pub fn upsert(&self, budget: Budget) -> Result<Budget, PaceError> {
        budget
            .validate()
            .map_err(|e| PaceError::Validation(e.to_string()))?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let existing = budgets
            .values_mut()
            .find(|b| b.user_id == budget.user_id && b.matches_category(&budget.category));

        let stored = match existing {
            Some(current) => {
                current.set_limit(budget.limit, budget.period);
                current.clone()
            }
            None => {
                budgets.insert(budget.id, budget.clone());
                budget
            }
        };

        info!(user = %stored.user_id, category = %stored.category, "stored budget");
        Ok(stored)
    }

    /// Delete a user's budget for a category
    pub fn remove_by_category(&self, user: &UserId, category: &str) -> Result<bool, PaceError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let initial = budgets.len();
        budgets.retain(|_, b| !(&b.user_id == user && b.matches_category(category)));
        let removed = budgets.len() < initial;

        if removed {
            info!(user = %user, category = %category, "removed budget");
        }
        Ok(removed)
    }

    /// Count budgets across all users
    pub fn count(&self) -> Result<usize, PaceError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PaceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }
}
