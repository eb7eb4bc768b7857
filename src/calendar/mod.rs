//! Business-day calendar: weekend policy plus pluggable holiday sources.

pub mod holidays;

use crate::core::types::{DateSet, WeekendPolicy};
use crate::extensions::chrono::{NaiveDateExt, WeekdayExt};
use chrono::{Datelike, NaiveDate, Weekday};

/// Read-only membership oracle over public holidays.
pub trait HolidaySource {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> HolidaySource for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

impl HolidaySource for DateSet {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.contains(date)
    }
}

/// A calendar with no public holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidaySource for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

impl WeekendPolicy {
    pub fn is_weekend(&self, day: Weekday) -> bool {
        match self {
            WeekendPolicy::SaturdaySunday => day.is_saturday_or_sunday(),
            WeekendPolicy::SundayOnly => day == Weekday::Sun,
        }
    }
}

pub struct BusinessCalendar {
    weekend: WeekendPolicy,
    holidays: Vec<Box<dyn HolidaySource>>,
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessCalendar {
    /// Saturday/Sunday weekends and no holidays.
    pub fn new() -> Self {
        Self {
            weekend: WeekendPolicy::default(),
            holidays: Vec::new(),
        }
    }

    pub fn with_weekend_policy(mut self, weekend: WeekendPolicy) -> Self {
        self.weekend = weekend;
        self
    }

    /// Add a holiday source; a date is a holiday if any source says so.
    pub fn with_holidays(mut self, source: impl HolidaySource + 'static) -> Self {
        self.holidays.push(Box::new(source));
        self
    }

    pub fn weekend_policy(&self) -> WeekendPolicy {
        self.weekend
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.is_holiday(date))
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.weekend.is_weekend(date.weekday()) && !self.is_holiday(date)
    }

    /// Smallest date on or after `date` that is a business day.
    ///
    /// Holiday sources must leave at least one business day in every run of
    /// consecutive dates, otherwise this never returns.
    pub fn next_business_day(&self, date: NaiveDate) -> NaiveDate {
        let mut d = date;
        while !self.is_business_day(d) {
            d = d.next_day();
        }
        d
    }
}

impl std::fmt::Debug for BusinessCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusinessCalendar")
            .field("weekend", &self.weekend)
            .field("holiday_sources", &self.holidays.len())
            .finish()
    }
}
