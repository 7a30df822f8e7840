//! Reports module for SpendPace
//!
//! Weekly review and the insights it carries.

pub mod insights;
pub mod review;

pub use insights::{generate_weekly_insights, Insight, InsightKind};
pub use review::WeeklyReview;
