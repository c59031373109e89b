use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Parameters handed to the analytics engine by its callers.
    #[serde(default)]
    pub analytics: AnalyticsSettings,
}

/// Parameters the collaborators feed into the analytics engine.
///
/// The engine itself never reads configuration; whoever invokes it passes
/// these values in as explicit arguments.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// The capital the equity curve starts from when tracking drawdown.
    pub starting_capital: Decimal,
    /// Width of one profit/loss histogram bucket, in currency units.
    pub histogram_bin_width: Decimal,
}

impl AnalyticsSettings {
    /// Checks the settings for values the analytics cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.histogram_bin_width <= Decimal::ZERO {
            return Err(ConfigError::Invalid {
                field: "analytics.histogram_bin_width".to_string(),
                reason: format!("must be greater than 0, got {}", self.histogram_bin_width),
            });
        }
        Ok(())
    }
}

// --- Default Implementations ---
// These allow a user to omit the `[analytics]` section, or single keys inside
// it, from their toml and still get a working setup.

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            starting_capital: dec!(10000),
            histogram_bin_width: dec!(50),
        }
    }
}
