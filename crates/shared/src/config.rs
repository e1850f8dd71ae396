//! Calendar configuration management.

use serde::Deserialize;

use crate::error::{SharedError, SharedResult};

/// Environment variable prefix, e.g. `DATERANGE__FISCAL__START_MONTH=7`.
pub const ENV_PREFIX: &str = "DATERANGE";

/// Calendar configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Fiscal year definition.
    #[serde(default)]
    pub fiscal: FiscalConfig,
    /// Output defaults for date ranges.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Fiscal year configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FiscalConfig {
    /// Calendar month the fiscal year starts in (1 = January).
    #[serde(default = "default_start_month")]
    pub start_month: u32,
    /// Day of month the fiscal year starts on.
    #[serde(default = "default_start_day")]
    pub start_day: u32,
    /// IANA zone the fiscal boundaries are evaluated in.
    #[serde(default = "default_zone")]
    pub zone: String,
}

fn default_start_month() -> u32 {
    1
}

fn default_start_day() -> u32 {
    1
}

fn default_zone() -> String {
    "UTC".to_string()
}

impl Default for FiscalConfig {
    fn default() -> Self {
        Self {
            start_month: default_start_month(),
            start_day: default_start_day(),
            zone: default_zone(),
        }
    }
}

/// Output defaults for date ranges.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Zone results are projected into. `None` keeps the start's zone.
    #[serde(default)]
    pub return_zone: Option<String>,
    /// `date()` pattern for day labels.
    #[serde(default = "default_day_format")]
    pub day_format: String,
    /// `date()` pattern for month labels.
    #[serde(default = "default_month_format")]
    pub month_format: String,
    /// `date()` pattern for year labels.
    #[serde(default = "default_year_format")]
    pub year_format: String,
}

fn default_day_format() -> String {
    "Y-m-d".to_string()
}

fn default_month_format() -> String {
    "Y-m".to_string()
}

fn default_year_format() -> String {
    "Y".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            return_zone: None,
            day_format: default_day_format(),
            month_format: default_month_format(),
            year_format: default_year_format(),
        }
    }
}

impl CalendarConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `DATERANGE__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> SharedResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        tracing::debug!(
            start_month = loaded.fiscal.start_month,
            start_day = loaded.fiscal.start_day,
            zone = %loaded.fiscal.zone,
            "Calendar configuration loaded"
        );
        Ok(loaded)
    }

    /// Checks ranges that serde alone cannot express.
    ///
    /// Only coarse bounds are checked here; the exact calendar validity of the
    /// fiscal start date is decided by the fiscal year constructor.
    pub fn validate(&self) -> SharedResult<()> {
        if !(1..=12).contains(&self.fiscal.start_month) {
            return Err(SharedError::InvalidSetting {
                key: "fiscal.start_month".to_string(),
                reason: format!("{} is not a month", self.fiscal.start_month),
            });
        }
        if !(1..=31).contains(&self.fiscal.start_day) {
            return Err(SharedError::InvalidSetting {
                key: "fiscal.start_day".to_string(),
                reason: format!("{} is not a day of month", self.fiscal.start_day),
            });
        }
        if self.fiscal.zone.trim().is_empty() {
            return Err(SharedError::InvalidSetting {
                key: "fiscal.zone".to_string(),
                reason: "zone must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
