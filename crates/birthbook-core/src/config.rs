use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_UPCOMING_DAYS, FULL_DATE_FORMAT};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub locale: LocaleConfig,
    pub schedule: ScheduleConfig,
    pub birthdays: BirthdayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleConfig {
    /// BCP-47 tag such as `en-GB`. When absent the process locale is used.
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    pub date_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BirthdayConfig {
    pub upcoming_days: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `birthbook.toml`.
    /// Variables use the `BIRTHBOOK_` prefix and `__` between sections, e.g.
    /// `BIRTHBOOK_SCHEDULE__DATE_FORMAT`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing or validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(
                config::Environment::with_prefix("BIRTHBOOK")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(config::Case::Snake)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed or the result fails validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("schedule.date_format", FULL_DATE_FORMAT)?
            .set_default("birthdays.upcoming_days", i64::from(DEFAULT_UPCOMING_DAYS))?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Checks values that deserialize fine but make no sense at runtime.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for a zero look-ahead window or
    /// an empty schedule format.
    pub fn validate(&self) -> CoreResult<()> {
        if self.birthdays.upcoming_days == 0 {
            return Err(CoreError::InvalidConfiguration(
                "birthdays.upcoming_days must be at least 1".to_string(),
            ));
        }
        if self.schedule.date_format.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "schedule.date_format must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
