//! User settings for SpendPace
//!
//! Manages user preferences including the default period, the
//! weeks-per-month conversion used for aggregate totals, and display options.

use serde::{Deserialize, Serialize};

use super::paths::PacePaths;
use crate::error::PaceError;
use crate::models::{PeriodKind, UserId};
use crate::services::category::DEFAULT_WEEKS_PER_MONTH;

/// User settings for SpendPace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// User whose data commands read and write when `--user` is not given
    #[serde(default = "default_user")]
    pub default_user: String,

    /// Period new budgets are declared for when none is given
    #[serde(default)]
    pub default_period: PeriodKind,

    /// Average weeks per month, used to fold weekly budgets into monthly totals
    ///
    /// A fixed approximation (4.33 by default), not derived from the calendar.
    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: f64,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_user() -> String {
    "default-user".to_string()
}

fn default_weeks_per_month() -> f64 {
    DEFAULT_WEEKS_PER_MONTH
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_user: default_user(),
            default_period: PeriodKind::default(),
            weeks_per_month: default_weeks_per_month(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PacePaths) -> Result<Self, PaceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PaceError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PaceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PacePaths) -> Result<(), PaceError> {
        self.validate()?;
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PaceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PaceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that settings hold usable values
    pub fn validate(&self) -> Result<(), PaceError> {
        if !self.weeks_per_month.is_finite() || self.weeks_per_month <= 0.0 {
            return Err(PaceError::Config(format!(
                "weeks_per_month must be a positive number, got {}",
                self.weeks_per_month
            )));
        }

        if self.default_user.trim().is_empty() {
            return Err(PaceError::Config("default_user cannot be empty".into()));
        }

        Ok(())
    }

    /// The configured default user as a typed id
    pub fn default_user_id(&self) -> Result<UserId, PaceError> {
        UserId::new(self.default_user.clone())
    }
}
