use chrono::{Datelike, NaiveDate, Weekday};

pub trait NaiveDateExt {
    /// The following calendar day, saturating at `NaiveDate::MAX`.
    fn next_day(self) -> NaiveDate;

    /// The first Monday on or after `self`.
    fn monday_on_or_after(self) -> NaiveDate;

    /// Every calendar day from `self` through `end`, both inclusive.
    fn days_through(self, end: NaiveDate) -> Vec<NaiveDate>;
}

impl NaiveDateExt for NaiveDate {
    fn next_day(self) -> NaiveDate {
        self.succ_opt().unwrap_or(NaiveDate::MAX)
    }

    fn monday_on_or_after(self) -> NaiveDate {
        let offset = (7 - self.weekday().num_days_from_monday()) % 7;
        self + chrono::Days::new(offset as u64)
    }

    fn days_through(self, end: NaiveDate) -> Vec<NaiveDate> {
        self.iter_days().take_while(|d| *d <= end).collect()
    }
}

pub trait WeekdayExt {
    fn is_saturday_or_sunday(self) -> bool;
}

impl WeekdayExt for Weekday {
    fn is_saturday_or_sunday(self) -> bool {
        matches!(self, Weekday::Sat | Weekday::Sun)
    }
}
