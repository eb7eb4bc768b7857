pub mod models;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, DateSetConfigItem, FileLoggingConfigItem, HolidayCalendarConfigItem,
    StartDateConfigItem, WeekendPolicyConfigItem,
};
use crate::core::types::{DateSet, HolidayCalendar, WeekendPolicy};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    StartDate,
    BlockedDates,
    WeekendPolicy,
    HolidayCalendar,
    ExtraHolidays,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub start_date: StartDateConfigItem,
    #[serde(default = "DateSetConfigItem::blocked")]
    pub blocked_dates: DateSetConfigItem,
    #[serde(default)]
    pub weekend_policy: WeekendPolicyConfigItem,
    #[serde(default)]
    pub holiday_calendar: HolidayCalendarConfigItem,
    #[serde(default = "DateSetConfigItem::extra_holidays")]
    pub extra_holidays: DateSetConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            start_date: StartDateConfigItem::default(),
            blocked_dates: DateSetConfigItem::blocked(),
            weekend_policy: WeekendPolicyConfigItem::default(),
            holiday_calendar: HolidayCalendarConfigItem::default(),
            extra_holidays: DateSetConfigItem::extra_holidays(),
            file_logging_enabled: FileLoggingConfigItem::default(),
        }
    }
}

/// Run settings: loaded from JSON, then optionally overridden in memory.
#[derive(Debug, Clone, Default)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// Load `path` when it exists, otherwise fall back to built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        *self.data.start_date.get_value()
    }
    pub fn blocked_dates(&self) -> &DateSet {
        self.data.blocked_dates.get_value()
    }
    pub fn weekend_policy(&self) -> WeekendPolicy {
        *self.data.weekend_policy.get_value()
    }
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        *self.data.holiday_calendar.get_value()
    }
    pub fn extra_holidays(&self) -> &DateSet {
        self.data.extra_holidays.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn value_string(&self, key: ConfigKey) -> String {
        let shown = match key {
            ConfigKey::StartDate => self
                .start_date()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            ConfigKey::BlockedDates => self.blocked_dates().to_string(),
            ConfigKey::WeekendPolicy => self.weekend_policy().to_string(),
            ConfigKey::HolidayCalendar => self.holiday_calendar().to_string(),
            ConfigKey::ExtraHolidays => self.extra_holidays().to_string(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
        };
        if shown.is_empty() { "-".to_string() } else { shown }
    }

    fn description(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::StartDate => self.data.start_date.description(),
            ConfigKey::BlockedDates => self.data.blocked_dates.description(),
            ConfigKey::WeekendPolicy => self.data.weekend_policy.description(),
            ConfigKey::HolidayCalendar => self.data.holiday_calendar.description(),
            ConfigKey::ExtraHolidays => self.data.extra_holidays.description(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.description(),
        }
    }

    /// (key, description, value) for every key, in declaration order.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        ConfigKey::iter()
            .map(|key| {
                (
                    key.to_string(),
                    self.description(key).to_string(),
                    self.value_string(key),
                )
            })
            .collect()
    }

    /// Override one key in memory. Returns the old and new display values.
    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<(String, String)> {
        let old = self.value_string(key);
        match key {
            ConfigKey::StartDate => self.data.start_date.set_value(new_value)?,
            ConfigKey::BlockedDates => self.data.blocked_dates.set_value(new_value)?,
            ConfigKey::WeekendPolicy => self.data.weekend_policy.set_value(new_value)?,
            ConfigKey::HolidayCalendar => self.data.holiday_calendar.set_value(new_value)?,
            ConfigKey::ExtraHolidays => self.data.extra_holidays.set_value(new_value)?,
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.set_value(new_value)?,
        }
        Ok((old, self.value_string(key)))
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<(String, String)> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str.trim(),
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }
}
