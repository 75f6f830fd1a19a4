//! Breakdown settings

use serde::Deserialize;

use crate::error::Result;

/// Environment prefix for settings, e.g. `ROS_BREAKDOWN_ZERO_IS_MISSING=false`
pub const ENV_PREFIX: &str = "ROS_BREAKDOWN";

/// Formatting options shared by the formatter, variation and document code
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreakdownSettings {
    /// Treat an explicit zero amount the same as an unset one
    #[serde(default = "default_zero_is_missing")]
    pub zero_is_missing: bool,

    /// Maximum fractional digits for resource amounts
    #[serde(default = "default_amount_precision")]
    pub amount_precision: usize,

    /// Fractional digits for percentage changes
    #[serde(default = "default_percent_precision")]
    pub percent_precision: usize,
}

fn default_zero_is_missing() -> bool {
    true
}

fn default_amount_precision() -> usize {
    2
}

fn default_percent_precision() -> usize {
    1
}

impl Default for BreakdownSettings {
    fn default() -> Self {
        Self {
            zero_is_missing: default_zero_is_missing(),
            amount_precision: default_amount_precision(),
            percent_precision: default_percent_precision(),
        }
    }
}

impl BreakdownSettings {
    /// Load settings from `ROS_BREAKDOWN_*` environment variables
    pub fn load() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load settings from any `config` source, falling back to defaults per field
    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder().add_source(source).build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn with_zero_is_missing(mut self, zero_is_missing: bool) -> Self {
        self.zero_is_missing = zero_is_missing;
        self
    }
}
