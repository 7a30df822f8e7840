//! Summary CLI commands
//!
//! Monthly summary, weekly overview and weekly review.

use crate::config::settings::Settings;
use crate::display::{format_monthly_summary, format_pacing};
use crate::error::PaceResult;
use crate::models::{Period, PeriodKind, UserId};
use crate::reports::WeeklyReview;
use crate::services::SummaryService;
use crate::storage::Storage;

use super::{print_json, resolve_now};

/// Show the month-to-date summary with per-category pacing
pub fn handle_monthly_summary(
    storage: &Storage,
    settings: &Settings,
    user: &UserId,
    at: Option<&str>,
    json: bool,
) -> PaceResult<()> {
    let now = resolve_now(at)?;
    let summary = SummaryService::new(storage, settings).monthly_summary(user, now)?;

    if json {
        print_json(&summary)
    } else {
        print!("{}", format_monthly_summary(&summary, &settings.currency_symbol));
        Ok(())
    }
}

/// Show overall pacing for the current week
pub fn handle_overview(
    storage: &Storage,
    settings: &Settings,
    user: &UserId,
    at: Option<&str>,
    json: bool,
) -> PaceResult<()> {
    let now = resolve_now(at)?;
    let pacing = SummaryService::new(storage, settings).overview(user, now)?;

    if json {
        print_json(&pacing)
    } else {
        let title = Period::resolve(now, PeriodKind::Weekly)?.to_string();
        print!("{}", format_pacing(&title, &pacing, &settings.currency_symbol));
        Ok(())
    }
}

/// Show the weekly review
pub fn handle_review(
    storage: &Storage,
    user: &UserId,
    at: Option<&str>,
    json: bool,
) -> PaceResult<()> {
    let now = resolve_now(at)?;
    let review = WeeklyReview::generate(storage, user, now)?;

    if json {
        print_json(&review)
    } else {
        print!("{}", review.format_terminal());
        Ok(())
    }
}
