//! Colombian public holidays.
//!
//! Three kinds of holiday are observed:
//! * fixed dates (New Year, Labour Day, Independence, Boyacá, Immaculate
//!   Conception, Christmas)
//! * dates moved to the following Monday unless they already fall on one
//!   (Epiphany, Saint Joseph, Saints Peter and Paul, Assumption, Columbus
//!   Day, All Saints, Independence of Cartagena)
//! * Easter-relative dates (Maundy Thursday, Good Friday, and the
//!   Monday-moved Ascension, Corpus Christi and Sacred Heart)

use crate::calendar::HolidaySource;
use crate::extensions::chrono::NaiveDateExt;
use chrono::{Datelike, Days, NaiveDate};
use std::cell::RefCell;
use std::collections::HashMap;

const FIXED: [(u32, u32, &str); 6] = [
    (1, 1, "New Year's Day"),
    (5, 1, "Labour Day"),
    (7, 20, "Independence Day"),
    (8, 7, "Battle of Boyacá"),
    (12, 8, "Immaculate Conception"),
    (12, 25, "Christmas Day"),
];

const MOVED_TO_MONDAY: [(u32, u32, &str); 7] = [
    (1, 6, "Epiphany"),
    (3, 19, "Saint Joseph's Day"),
    (6, 29, "Saints Peter and Paul"),
    (8, 15, "Assumption Day"),
    (10, 12, "Columbus Day"),
    (11, 1, "All Saints' Day"),
    (11, 11, "Independence of Cartagena"),
];

// Offsets from Easter Sunday, with whether the date moves to the next Monday.
const EASTER_RELATIVE: [(i64, bool, &str); 5] = [
    (-3, false, "Maundy Thursday"),
    (-2, false, "Good Friday"),
    (39, true, "Ascension Day"),
    (60, true, "Corpus Christi"),
    (68, true, "Sacred Heart"),
];

/// Gregorian Easter Sunday (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    NaiveDate::from_ymd_opt(year, (n / 31) as u32, (n % 31 + 1) as u32)
}

/// Memoizes each year's holiday list on first lookup.
#[derive(Debug, Default)]
pub struct ColombianHolidays {
    by_year: RefCell<HashMap<i32, Vec<NaiveDate>>>,
}

impl ColombianHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every observed holiday of `year` with its name, sorted by date.
    pub fn for_year(year: i32) -> Vec<(NaiveDate, &'static str)> {
        let mut out = Vec::new();
        for (month, day, name) in FIXED {
            if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
                out.push((d, name));
            }
        }
        for (month, day, name) in MOVED_TO_MONDAY {
            if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
                out.push((d.monday_on_or_after(), name));
            }
        }
        if let Some(easter) = easter_sunday(year) {
            for (offset, moved, name) in EASTER_RELATIVE {
                let d = if offset < 0 {
                    easter.checked_sub_days(Days::new(offset.unsigned_abs()))
                } else {
                    easter.checked_add_days(Days::new(offset as u64))
                };
                if let Some(d) = d {
                    out.push((if moved { d.monday_on_or_after() } else { d }, name));
                }
            }
        }
        out.sort_by_key(|(d, _)| *d);
        out
    }
}

impl HolidaySource for ColombianHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        let mut cache = self.by_year.borrow_mut();
        cache
            .entry(date.year())
            .or_insert_with(|| Self::for_year(date.year()).into_iter().map(|(d, _)| d).collect())
            .contains(&date)
    }
}
