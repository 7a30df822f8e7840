//! Storage layer for SpendPace
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Computations read through the [`BudgetStore`] trait so they can
//! run against any backing store.

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::PacePaths;
use crate::error::{PaceError, PaceResult};
use crate::models::{Budget, DateRange, Expense, UserId};

/// Read access to a user's budgets and expenses
pub trait BudgetStore {
    /// All budgets belonging to a user
    fn budgets(&self, user: &UserId) -> PaceResult<Vec<Budget>>;

    /// A user's expenses dated within `[range.start, range.end)`,
    /// optionally restricted to one category
    fn expenses(
        &self,
        user: &UserId,
        range: &DateRange,
        category: Option<&str>,
    ) -> PaceResult<Vec<Expense>>;

    /// A user's budget for one category (case-insensitive)
    fn budget_for_category(&self, user: &UserId, category: &str) -> PaceResult<Option<Budget>> {
        Ok(self
            .budgets(user)?
            .into_iter()
            .find(|b| b.matches_category(category)))
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PacePaths,
    pub budgets: BudgetRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PacePaths) -> Result<Self, PaceError> {
        paths.ensure_directories()?;

        Ok(Self {
            budgets: BudgetRepository::new(paths.budgets_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PacePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PaceError> {
        self.budgets.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PaceError> {
        self.budgets.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Create or replace a user's budget for its category, then persist
    pub fn upsert_budget(&self, budget: Budget) -> PaceResult<Budget> {
        let stored = self.budgets.upsert(budget)?;
        self.budgets.save()?;
        Ok(stored)
    }

    /// Remove a user's budget for a category, then persist
    pub fn remove_budget(&self, user: &UserId, category: &str) -> PaceResult<()> {
        if !self.budgets.remove_by_category(user, category)? {
            return Err(PaceError::budget_not_found(category));
        }
        self.budgets.save()
    }

    /// Record an expense, then persist
    pub fn add_expense(&self, expense: Expense) -> PaceResult<Expense> {
        let stored = self.expenses.add(expense)?;
        self.expenses.save()?;
        Ok(stored)
    }
}

impl BudgetStore for Storage {
    fn budgets(&self, user: &UserId) -> PaceResult<Vec<Budget>> {
        self.budgets.get_for_user(user)
    }

    fn expenses(
        &self,
        user: &UserId,
        range: &DateRange,
        category: Option<&str>,
    ) -> PaceResult<Vec<Expense>> {
        self.expenses.get_in_range(user, range, category)
    }

    fn budget_for_category(&self, user: &UserId, category: &str) -> PaceResult<Option<Budget>> {
        self.budgets.get_by_category(user, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PeriodKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.paths().base_dir(), temp_dir.path());
    }

    #[test]
    fn test_mutations_persist() {
        let (temp_dir, storage) = create_storage();
        let sam = UserId::new("sam").unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        storage
            .upsert_budget(Budget::flat(sam.clone(), "Food", Money::from_cents(50000), PeriodKind::Monthly))
            .unwrap();
        storage
            .add_expense(Expense::new(sam.clone(), Money::from_cents(1500), "Lunch", Some("Food"), date))
            .unwrap();

        let mut reopened =
            Storage::new(PacePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        reopened.load_all().unwrap();

        assert!(reopened.budget_for_category(&sam, "food").unwrap().is_some());
        let range = DateRange::new(
            date.date().and_hms_opt(0, 0, 0).unwrap(),
            date.date().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
        );
        assert_eq!(reopened.expenses(&sam, &range, None).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_missing_budget_is_not_found() {
        let (_temp_dir, storage) = create_storage();
        let sam = UserId::new("sam").unwrap();

        let err = storage.remove_budget(&sam, "Nope").unwrap_err();
        assert!(err.is_not_found());
    }
}
