//! Service layer for SpendPace
//!
//! The pacing engine proper (period resolution, spending aggregation,
//! pacing and category resolution) is pure; [`summary`] wires it to a store.

pub mod category;
pub mod pacing;
pub mod spending;
pub mod summary;

pub use category::{resolve_all, resolve_category, CategoryPacing, CategorySummary};
pub use pacing::{calculate_pacing, BudgetPacing};
pub use spending::{aggregate, SpendingTotals};
pub use summary::{MonthlySummary, SummaryService};
