use super::{monday, plain_calendar, ymd};
use crate::calendar::BusinessCalendar;
use crate::core::types::DateSet;
use crate::scheduler::sequencer::{BusinessDays, MAX_CALENDAR_ADVANCES, take_business_days};
use chrono::NaiveDate;

#[test]
fn takes_exact_count_skipping_weekends() {
    let cal = plain_calendar();
    let days = take_business_days(&cal, monday(), 7, &DateSet::new());
    assert_eq!(
        days,
        vec![
            ymd(2025, 3, 3),
            ymd(2025, 3, 4),
            ymd(2025, 3, 5),
            ymd(2025, 3, 6),
            ymd(2025, 3, 7),
            ymd(2025, 3, 10),
            ymd(2025, 3, 11),
        ]
    );
}

#[test]
fn skips_blocked_dates_and_holidays() {
    let cal = plain_calendar().with_holidays(DateSet::try_from_str("2025-03-04").unwrap());
    let blocked = DateSet::try_from_str("2025-03-06:2025-03-07").unwrap();
    let days = take_business_days(&cal, monday(), 3, &blocked);
    assert_eq!(days, vec![ymd(2025, 3, 3), ymd(2025, 3, 5), ymd(2025, 3, 10)]);
}

#[test]
fn starting_on_a_weekend_begins_on_monday() {
    let cal = plain_calendar();
    let days = take_business_days(&cal, ymd(2025, 3, 8), 1, &DateSet::new());
    assert_eq!(days, vec![ymd(2025, 3, 10)]);
}

#[test]
fn zero_count_yields_nothing() {
    let cal = plain_calendar();
    assert!(take_business_days(&cal, monday(), 0, &DateSet::new()).is_empty());
}

#[test]
fn stops_at_advance_bound_with_short_result() {
    let cal = BusinessCalendar::new().with_holidays(|_: NaiveDate| true);
    let blocked = DateSet::new();
    let mut walk = BusinessDays::new(&cal, monday(), &blocked);
    assert_eq!(walk.next(), None);
    assert_eq!(walk.advances(), MAX_CALENDAR_ADVANCES);
    // Exhausted walks stay exhausted.
    assert_eq!(walk.next(), None);
}

#[test]
fn request_larger_than_bound_returns_short_sequence() {
    let cal = plain_calendar();
    let days = take_business_days(&cal, monday(), 9_000, &DateSet::new());
    assert!(days.len() < 9_000);
    // 10,000 calendar days hold 1,428 full weeks plus four days.
    assert_eq!(days.len(), 1_428 * 5 + 4);
}
