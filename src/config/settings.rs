//! User settings for finplan
//!
//! Manages user preferences: display currency, health score policy and the
//! defaults used to seed investment projections.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::FinplanPaths;
use crate::analysis::health::ScoringPolicy;
use crate::error::FinplanError;
use crate::models::money::DEFAULT_CURRENCY_SYMBOL;
use crate::models::{InvestmentPlan, Money};

/// Defaults for the investment projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentDefaults {
    /// Share of the monthly surplus suggested as contribution
    pub contribution_share: f64,
    /// Expected annual return in percent
    pub annual_return_rate: f64,
    /// Investment horizon in years
    pub duration_years: u32,
    /// Savings goal
    pub goal_amount: Money,
}

impl Default for InvestmentDefaults {
    fn default() -> Self {
        Self {
            contribution_share: 0.3,
            annual_return_rate: 5.0,
            duration_years: 10,
            goal_amount: Money::from_units(100_000),
        }
    }
}

/// User settings for finplan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Health score weights and breakpoints
    #[serde(default)]
    pub scoring: ScoringPolicy,

    /// Investment projection defaults
    #[serde(default)]
    pub investment: InvestmentDefaults,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            scoring: ScoringPolicy::default(),
            investment: InvestmentDefaults::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Unlike the budget and history, a broken settings file is an error: a
    /// silently replaced scoring policy would change every score shown.
    pub fn load_or_create(paths: &FinplanPaths) -> Result<Self, FinplanError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinplanError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinplanError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check settings values
    pub fn validate(&self) -> Result<(), FinplanError> {
        self.scoring
            .validate()
            .map_err(|e| FinplanError::Config(format!("Invalid scoring policy: {}", e)))?;

        let share = self.investment.contribution_share;
        if !share.is_finite() || !(0.0..=1.0).contains(&share) {
            return Err(FinplanError::Config(format!(
                "Contribution share must be between 0 and 1, got {}",
                share
            )));
        }

        let defaults = &self.investment;
        InvestmentPlan {
            monthly_contribution: Money::zero(),
            annual_return_rate: defaults.annual_return_rate,
            duration_years: defaults.duration_years,
            goal_amount: defaults.goal_amount,
        }
        .validate()
        .map_err(|e| FinplanError::Config(format!("Invalid investment defaults: {}", e)))?;

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinplanPaths) -> Result<(), FinplanError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinplanError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FinplanError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
