use crate::core::types::{Bool, Date, DateSet, HolidayCalendar, WeekendPolicy};
use crate::errors::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartDateConfigItem {
    pub value: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

impl Default for StartDateConfigItem {
    fn default() -> Self {
        Self {
            value: None,
            description: "First date the search may use; empty means today.".into(),
        }
    }
}

impl ConfigItem<Option<NaiveDate>> for StartDateConfigItem {
    fn get_value(&self) -> &Option<NaiveDate> {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        if new_value.trim().is_empty() {
            self.value = None;
            return Ok(());
        }
        self.value = Some(Date::try_from_str(new_value)?.0);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// Shared shape for the two date-set keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateSetConfigItem {
    pub value: DateSet,
    #[serde(default)]
    pub description: String,
}

impl DateSetConfigItem {
    pub fn blocked() -> Self {
        Self {
            value: DateSet::new(),
            description: "Dates closed to everyone, e.g. 2025-12-24:2025-12-31,2026-01-02.".into(),
        }
    }

    pub fn extra_holidays() -> Self {
        Self {
            value: DateSet::new(),
            description: "Additional non-working dates on top of the holiday calendar.".into(),
        }
    }
}

impl ConfigItem<DateSet> for DateSetConfigItem {
    fn get_value(&self) -> &DateSet {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = DateSet::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekendPolicyConfigItem {
    pub value: WeekendPolicy,
    #[serde(default)]
    pub description: String,
}

impl Default for WeekendPolicyConfigItem {
    fn default() -> Self {
        Self {
            value: WeekendPolicy::default(),
            description: "Weekdays that never count as business days.".into(),
        }
    }
}

impl ConfigItem<WeekendPolicy> for WeekendPolicyConfigItem {
    fn get_value(&self) -> &WeekendPolicy {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = WeekendPolicy::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayCalendarConfigItem {
    pub value: HolidayCalendar,
    #[serde(default)]
    pub description: String,
}

impl Default for HolidayCalendarConfigItem {
    fn default() -> Self {
        Self {
            value: HolidayCalendar::default(),
            description: "Public holiday calendar.".into(),
        }
    }
}

impl ConfigItem<HolidayCalendar> for HolidayCalendarConfigItem {
    fn get_value(&self) -> &HolidayCalendar {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = HolidayCalendar::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    #[serde(default)]
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Write a log file for every run.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
