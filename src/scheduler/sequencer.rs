use crate::calendar::BusinessCalendar;
use crate::core::types::DateSet;
use crate::extensions::chrono::NaiveDateExt;
use chrono::NaiveDate;

/// Calendar days a single sequence may walk before giving up.
pub const MAX_CALENDAR_ADVANCES: u32 = 10_000;

/// Lazy walk over the business days from a start date that are not blocked.
///
/// Ends after `MAX_CALENDAR_ADVANCES` calendar days even when fewer dates
/// than wanted were accepted.
pub struct BusinessDays<'a> {
    calendar: &'a BusinessCalendar,
    blocked: &'a DateSet,
    cursor: NaiveDate,
    advances: u32,
}

impl<'a> BusinessDays<'a> {
    pub fn new(calendar: &'a BusinessCalendar, start: NaiveDate, blocked: &'a DateSet) -> Self {
        Self {
            calendar,
            blocked,
            cursor: start,
            advances: 0,
        }
    }

    pub fn advances(&self) -> u32 {
        self.advances
    }
}

impl Iterator for BusinessDays<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while self.advances < MAX_CALENDAR_ADVANCES {
            let day = self.cursor;
            self.cursor = day.next_day();
            self.advances += 1;
            if self.calendar.is_business_day(day) && !self.blocked.contains(day) {
                return Some(day);
            }
        }
        None
    }
}

/// Up to `count` qualifying dates from `start`. Callers must check the
/// length: a short result means the advance bound was hit.
pub fn take_business_days(
    calendar: &BusinessCalendar,
    start: NaiveDate,
    count: u32,
    blocked: &DateSet,
) -> Vec<NaiveDate> {
    BusinessDays::new(calendar, start, blocked)
        .take(count as usize)
        .collect()
}
